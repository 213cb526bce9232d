//! Fake listing generation for development databases.
//!
//! Rooms are generated in parallel with Rayon and written one by one
//! through the document store. Every seeded room carries a `seeded` marker
//! so [`clear_seeded_rooms`] never touches real listings.

mod models;
mod rooms;

pub use models::{RoomSeed, SeedConfig};
pub use rooms::{ROOMS, clear_seeded_rooms, generate_rooms, seed_rooms};
