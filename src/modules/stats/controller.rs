use axum::{Json, extract::State};
use stayvista_core::{AppError, ErrorResponse};
use stayvista_models::stats::{AdminStats, GuestStats, HostStats};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::stats::service::StatsService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/admin-stat",
    responses(
        (status = 200, description = "Platform-wide totals and sales chart", body = AdminStats),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Statistics"
)]
#[instrument(skip(state))]
pub async fn get_admin_stats(State(state): State<AppState>) -> Result<Json<AdminStats>, AppError> {
    let stats = StatsService::admin_stats(&state.store).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/host-stat",
    responses(
        (status = 200, description = "The caller's hosting totals", body = HostStats),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - host only", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Statistics"
)]
#[instrument(skip(state, auth_user), fields(host = %auth_user.email()))]
pub async fn get_host_stats(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<HostStats>, AppError> {
    let stats = StatsService::host_stats(&state.store, auth_user.email()).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/guest-stat",
    responses(
        (status = 200, description = "The caller's booking totals", body = GuestStats),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Statistics"
)]
#[instrument(skip(state, auth_user), fields(guest = %auth_user.email()))]
pub async fn get_guest_stats(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<GuestStats>, AppError> {
    let stats = StatsService::guest_stats(&state.store, auth_user.email()).await?;
    Ok(Json(stats))
}
