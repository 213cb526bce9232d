use crate::modules::rooms::controller::{
    create_room, delete_room, get_my_listings, get_room, get_rooms, update_room,
    update_room_status,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post, put},
};

/// Public reads. `DELETE /room/{id}` shares the path, so it carries its own
/// host check through the `RequireHost` extractor.
pub fn init_rooms_public_router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(get_rooms))
        .route("/room/{id}", get(get_room).delete(delete_room))
}

/// Routes behind the Authentication Gate.
pub fn init_rooms_auth_router() -> Router<AppState> {
    Router::new().route("/room/status/{id}", patch(update_room_status))
}

/// Routes behind the Host gate. `/add-room` is the path older clients post to.
pub fn init_rooms_host_router() -> Router<AppState> {
    Router::new()
        .route("/room", post(create_room))
        .route("/add-room", post(create_room))
        .route("/room/update/{id}", put(update_room))
        .route("/my-listings/{email}", get(get_my_listings))
}
