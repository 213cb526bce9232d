use async_trait::async_trait;
use serde_json::Value;

use crate::document::{
    DeleteResult, Filter, InsertOneResult, Projection, Update, UpdateOptions, UpdateResult,
};
use crate::error::StoreError;

/// Generic persistence interface over named collections of JSON documents.
///
/// Only single-document atomicity is guaranteed. Sequences such as
/// "find, then insert" issued by callers are not atomic.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Value>, StoreError>;

    async fn find_one(&self, collection: &str, filter: &Filter)
    -> Result<Option<Value>, StoreError>;

    /// Inserts `document`, assigning a fresh `_id` when it carries none.
    async fn insert_one(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<InsertOneResult, StoreError>;

    /// Updates the first document matching `filter`. With `options.upsert`,
    /// inserts `filter fields + update fields` when nothing matches.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        update: &Update,
        options: UpdateOptions,
    ) -> Result<UpdateResult, StoreError>;

    async fn delete_one(&self, collection: &str, filter: &Filter)
    -> Result<DeleteResult, StoreError>;

    async fn count_documents(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
