use crate::modules::reviews::controller::{create_review, get_room_reviews};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_reviews_public_router() -> Router<AppState> {
    Router::new().route("/reviews/{room_id}", get(get_room_reviews))
}

/// Routes behind the Authentication Gate.
pub fn init_reviews_auth_router() -> Router<AppState> {
    Router::new().route("/review", post(create_review))
}
