use crate::modules::users::controller::{get_user, get_users, save_user, update_role};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, put},
};

pub fn init_users_public_router() -> Router<AppState> {
    Router::new().route("/user", put(save_user))
}

/// Routes behind the Authentication Gate.
pub fn init_users_auth_router() -> Router<AppState> {
    Router::new().route("/user/{email}", get(get_user))
}

/// Routes behind the Admin gate.
pub fn init_users_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/user/update-role/{email}", patch(update_role))
}
