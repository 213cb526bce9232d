//! # StayVista Config
//!
//! Configuration types for the StayVista API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Credential signing configuration
//! - [`cookie`]: Credential cookie attributes, split by deployment environment
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`payment`]: Payment processor configuration
//! - [`server`]: Listen ports and persistence URL
//!
//! # Example
//!
//! ```ignore
//! use stayvista_config::{CorsConfig, JwtConfig, PaymentConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let payment_config = PaymentConfig::from_env();
//! ```

pub mod cookie;
pub mod cors;
pub mod jwt;
pub mod payment;
pub mod server;

// Re-export commonly used types at crate root
pub use cookie::{CookieConfig, CookieSameSite, Environment};
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use payment::PaymentConfig;
pub use server::ServerConfig;
