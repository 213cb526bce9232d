//! Request gates.
//!
//! - [`auth`]: the Authentication Gate and the [`auth::AuthUser`] extractor
//! - [`role`]: the Admin and Host gates, as middleware and as extractors
//!
//! # Flow
//!
//! 1. Client sends the credential in the `token` cookie
//! 2. [`auth::require_auth`] verifies it and attaches the claim, or rejects with 401
//! 3. [`role::require_admin`] / [`role::require_host`] look up the caller's stored
//!    role and reject with 403 unless it matches exactly
//! 4. The handler runs
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::role::RequireHost;
//!
//! async fn guest_stat(auth_user: AuthUser) -> impl IntoResponse { /* ... */ }
//!
//! async fn delete_room(RequireHost(host): RequireHost) -> impl IntoResponse { /* ... */ }
//! ```

pub mod auth;
pub mod role;
