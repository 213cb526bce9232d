use axum::{
    Json,
    extract::{Path, Query, State},
};
use stayvista_core::{AppError, ErrorResponse};
use stayvista_db::{DeleteResult, InsertOneResult, UpdateResult};
use stayvista_models::rooms::{CreateRoomDto, Room, RoomQuery, RoomStatusDto, UpdateRoomDto};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireHost;
use crate::modules::rooms::service::RoomService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/rooms",
    params(RoomQuery),
    responses(
        (status = 200, description = "Rooms, optionally filtered by category", body = Vec<Room>)
    ),
    tag = "Rooms"
)]
#[instrument(skip(state))]
pub async fn get_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = RoomService::list_rooms(&state.store, query.category()).await?;
    Ok(Json(rooms))
}

#[utoipa::path(
    get,
    path = "/room/{id}",
    params(("id" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = Room),
        (status = 404, description = "Room not found", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
#[instrument(skip(state))]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, AppError> {
    let room = RoomService::get_room(&state.store, &id).await?;
    Ok(Json(room))
}

#[utoipa::path(
    post,
    path = "/room",
    request_body = CreateRoomDto,
    responses(
        (status = 200, description = "Room created", body = InsertOneResult),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - host only, and only for yourself", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, auth_user, dto), fields(host = %auth_user.email()))]
pub async fn create_room(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateRoomDto>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = RoomService::create_room(&state.store, auth_user.email(), dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    put,
    path = "/room/update/{id}",
    params(("id" = String, Path, description = "Room ID")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = UpdateResult),
        (status = 400, description = "Nothing to update", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - host only", body = ErrorResponse),
        (status = 404, description = "No room of yours with this ID", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, auth_user, dto), fields(host = %auth_user.email()))]
pub async fn update_room(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateRoomDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = RoomService::update_room(&state.store, auth_user.email(), &id, dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    patch,
    path = "/room/status/{id}",
    params(("id" = String, Path, description = "Room ID")),
    request_body = RoomStatusDto,
    responses(
        (status = 200, description = "Booked flag written", body = UpdateResult),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state))]
pub async fn update_room_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<RoomStatusDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = RoomService::set_booked(&state.store, &id, dto.booked).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/room/{id}",
    params(("id" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = DeleteResult),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - host only", body = ErrorResponse),
        (status = 404, description = "No room of yours with this ID", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, host), fields(host = %host.email()))]
pub async fn delete_room(
    State(state): State<AppState>,
    RequireHost(host): RequireHost,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = RoomService::delete_room(&state.store, host.email(), &id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/my-listings/{email}",
    params(("email" = String, Path, description = "Host email; must be the caller")),
    responses(
        (status = 200, description = "The host's rooms", body = Vec<Room>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Rooms"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_listings(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Room>>, AppError> {
    auth_user.ensure_is(&email)?;
    let rooms = RoomService::host_listings(&state.store, &email).await?;
    Ok(Json(rooms))
}
