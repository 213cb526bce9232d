use crate::modules::auth::controller::{issue_credential, logout};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_credential))
        .route("/logout", get(logout))
}
