//! Session credential codec.
//!
//! Credentials are HS256 JWTs signed with the process-wide secret from
//! [`JwtConfig`]. Verification collapses every failure (bad signature,
//! malformed token, elapsed expiry) into one unauthorized error so the
//! client never learns why a credential was rejected.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use stayvista_config::JwtConfig;
use stayvista_core::AppError;

use crate::claims::Claims;

/// Message returned for every rejected credential.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";

/// Signs an identity claim for `email`, valid for `jwt_config.token_expiry` seconds.
///
/// # Errors
///
/// Fails only when the signing key is unusable (empty secret or encoder failure).
pub fn issue_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    if jwt_config.secret.is_empty() {
        return Err(AppError::internal_error("Signing key is not configured"));
    }

    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        email: email.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a credential and returns the embedded claim.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Credential rejected");
        AppError::unauthorized(UNAUTHORIZED_MESSAGE)
    })
}
