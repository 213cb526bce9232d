use crate::modules::stats::controller::{get_admin_stats, get_guest_stats, get_host_stats};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_stats_auth_router() -> Router<AppState> {
    Router::new().route("/guest-stat", get(get_guest_stats))
}

pub fn init_stats_host_router() -> Router<AppState> {
    Router::new().route("/host-stat", get(get_host_stats))
}

pub fn init_stats_admin_router() -> Router<AppState> {
    Router::new().route("/admin-stat", get(get_admin_stats))
}
