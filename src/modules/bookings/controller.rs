use axum::{
    Json,
    extract::{Path, State},
};
use stayvista_core::{AppError, ErrorResponse};
use stayvista_db::{DeleteResult, InsertOneResult};
use stayvista_models::bookings::{Booking, CreateBookingDto};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::bookings::service::BookingService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/booking",
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Booking created", body = InsertOneResult),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Guest is not the caller", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Bookings"
)]
#[instrument(skip(state, auth_user, dto), fields(guest = %auth_user.email()))]
pub async fn create_booking(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateBookingDto>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = BookingService::create_booking(&state.store, auth_user.email(), dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/my-bookings/{email}",
    params(("email" = String, Path, description = "Guest email; must be the caller")),
    responses(
        (status = 200, description = "The guest's bookings", body = Vec<Booking>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Bookings"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    auth_user.ensure_is(&email)?;
    let bookings = BookingService::find_bookings(&state.store, &BookingService::by_guest(&email))
        .await?;
    Ok(Json(bookings))
}

#[utoipa::path(
    get,
    path = "/manage-bookings/{email}",
    params(("email" = String, Path, description = "Host email; must be the caller")),
    responses(
        (status = 200, description = "Bookings of the host's rooms", body = Vec<Booking>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - host only", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Bookings"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_manage_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    auth_user.ensure_is(&email)?;
    let bookings = BookingService::find_bookings(&state.store, &BookingService::by_host(&email))
        .await?;
    Ok(Json(bookings))
}

#[utoipa::path(
    delete,
    path = "/booking/{id}",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = DeleteResult),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No booking of yours with this ID", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Bookings"
)]
#[instrument(skip(state, auth_user), fields(guest = %auth_user.email()))]
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = BookingService::cancel_booking(&state.store, auth_user.email(), &id).await?;
    Ok(Json(result))
}
