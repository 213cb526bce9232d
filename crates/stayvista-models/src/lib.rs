//! # StayVista Models
//!
//! Domain models and DTOs for the StayVista API.
//!
//! Stored shapes mirror the JSON documents kept by the document store: field
//! names are camelCase, identifiers live in `_id`, and prices submitted from
//! listing forms may arrive as numeric text.
//!
//! # Modules
//!
//! - [`auth`]: credential issuance request and acknowledgement
//! - [`common`]: contact details embedded in rooms, bookings and reviews
//! - [`rooms`]: listings
//! - [`users`]: user records and the self-service / privileged write DTOs
//! - [`bookings`]: reservations
//! - [`reviews`]: guest reviews of a room
//! - [`stats`]: dashboard aggregates and the sales chart
//! - [`payments`]: payment-intent request/response
//!
//! # Example
//!
//! ```ignore
//! use stayvista_models::stats::{BookingSummary, build_chart};
//!
//! let chart = build_chart(&bookings);
//! ```

pub mod auth;
pub mod bookings;
pub mod common;
pub mod payments;
pub mod reviews;
pub mod rooms;
pub mod stats;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{SuccessResponse, TokenRequest};
pub use bookings::{Booking, CreateBookingDto};
pub use common::PersonInfo;
pub use payments::{PaymentIntentRequest, PaymentIntentResponse};
pub use reviews::{CreateReviewDto, NewReview, Review};
pub use rooms::{CreateRoomDto, Room, RoomQuery, RoomStatusDto, UpdateRoomDto};
pub use stats::{AdminStats, BookingSummary, ChartData, GuestStats, HostStats, build_chart, total_price};
pub use users::{NewUserFields, SaveUserDto, UpdateRoleDto, User};
