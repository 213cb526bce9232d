//! # StayVista CLI
//!
//! Administrative utilities for StayVista: bootstrapping the first admin,
//! changing roles outside the HTTP surface, and seeding fake listings for
//! development.
//!
//! ## Usage
//!
//! ```ignore
//! use stayvista_cli::{admin, seeder};
//!
//! let store = stayvista_db::connect(&database_url).await?;
//! admin::create_admin(&store, "owner@stayvista.com", Some("Owner")).await?;
//! seeder::seed_rooms(&store, SeedConfig::new(20, "host@stayvista.com")).await?;
//! ```

pub mod admin;
pub mod seeder;
