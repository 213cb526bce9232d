//! # StayVista DB
//!
//! Document-store interface and backends for the StayVista API.
//!
//! Every collection (rooms, users, bookings, reviews) is a set of JSON
//! documents addressed by a string `_id`. Handlers talk to the store through
//! the object-safe [`DocumentStore`] trait, injected as
//! `Arc<dyn DocumentStore>`, so tests substitute [`MemoryStore`] for the
//! PostgreSQL backend.
//!
//! - [`document`]: [`Filter`], [`Update`], [`Projection`] and the acknowledgement types
//! - [`store`]: the [`DocumentStore`] trait
//! - [`collection`]: typed [`Collection<T>`] access over a store
//! - [`memory`]: in-process backend
//! - [`postgres`]: JSONB-backed PostgreSQL backend
//!
//! # Example
//!
//! ```ignore
//! use stayvista_db::{connect, Filter};
//!
//! let store = connect("memory://").await?;
//! let rooms = store.find("rooms", &Filter::new().eq("category", "Beach"), None).await?;
//! ```

use std::sync::Arc;

pub mod collection;
pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use collection::Collection;
pub use document::{
    DeleteResult, Filter, ID_FIELD, InsertOneResult, Projection, Update, UpdateOptions,
    UpdateResult,
};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;
pub use store::DocumentStore;

/// Unique indexes every backend enforces, as `(collection, field)`.
pub const UNIQUE_INDEXES: &[(&str, &str)] = &[("users", "email")];

/// Opens the store named by `database_url`.
///
/// `memory://` selects the in-process store; `postgres://` and
/// `postgresql://` connect a pool and run the embedded migrations.
pub async fn connect(database_url: &str) -> Result<Arc<dyn DocumentStore>, StoreError> {
    if database_url.starts_with("memory://") {
        tracing::warn!("Using in-memory document store; data is lost on restart");
        return Ok(Arc::new(MemoryStore::new()));
    }

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        let store = PgDocumentStore::connect(database_url).await?;
        return Ok(Arc::new(store));
    }

    let scheme = database_url.split("://").next().unwrap_or_default();
    Err(StoreError::UnsupportedUrl(scheme.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_memory() {
        let store = connect("memory://").await.unwrap();
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_rejects_unknown_scheme() {
        let err = connect("mongodb://localhost").await.unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedUrl(scheme) if scheme == "mongodb"));
    }
}
