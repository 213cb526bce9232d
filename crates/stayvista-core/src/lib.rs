//! # StayVista Core
//!
//! Core types, errors, and utilities for the StayVista API.
//!
//! This crate provides foundational types used throughout the StayVista application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`serde`]: Lenient serde deserializers for client-submitted documents
//!
//! # Example
//!
//! ```ignore
//! use stayvista_core::errors::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Room not found"));
//! ```

pub mod errors;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
