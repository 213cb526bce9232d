pub mod auth;
pub mod bookings;
pub mod payments;
pub mod reviews;
pub mod rooms;
pub mod stats;
pub mod users;
