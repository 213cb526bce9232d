//! # StayVista Auth
//!
//! Identity claims, the credential codec, and the role model for the StayVista API.
//!
//! This crate provides:
//!
//! - [`claims`]: The identity claim embedded in a signed credential
//! - [`jwt`]: Credential issuance and verification
//! - [`roles`]: The closed [`UserRole`] / [`UserStatus`] enumerations and the
//!   role-equality decision used by the authorization gates
//!
//! # Example
//!
//! ```ignore
//! use stayvista_auth::{issue_token, verify_token};
//! use stayvista_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = issue_token("guest@example.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email, "guest@example.com");
//! ```

pub mod claims;
pub mod jwt;
pub mod roles;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{issue_token, verify_token};
pub use roles::{UserRole, UserStatus, authorize_role};
