//! JWT claim structure for session credentials.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity claim carried by a session credential.
///
/// The email is the stable lookup key for the user record; role is never
/// embedded, so authorization always reads the current stored role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User's email address (identity key)
    pub email: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
