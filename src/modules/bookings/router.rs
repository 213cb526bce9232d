use crate::modules::bookings::controller::{
    cancel_booking, create_booking, get_manage_bookings, get_my_bookings,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes behind the Authentication Gate.
pub fn init_bookings_auth_router() -> Router<AppState> {
    Router::new()
        .route("/booking", post(create_booking))
        .route("/booking/{id}", delete(cancel_booking))
        .route("/my-bookings/{email}", get(get_my_bookings))
}

/// Routes behind the Host gate.
pub fn init_bookings_host_router() -> Router<AppState> {
    Router::new().route("/manage-bookings/{email}", get(get_manage_bookings))
}
