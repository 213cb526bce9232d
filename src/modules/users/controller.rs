use axum::{
    Json,
    extract::{Path, State},
};
use stayvista_core::{AppError, ErrorResponse};
use stayvista_db::UpdateResult;
use stayvista_models::users::{SaveUserDto, UpdateRoleDto, User};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::{SaveUserOutcome, UserService};
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/user/{email}",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.store, &email).await?;
    Ok(Json(user))
}

/// Self-service registration and host request.
#[utoipa::path(
    put,
    path = "/user",
    request_body = SaveUserDto,
    responses(
        (status = 200, description = "Existing record, or the write acknowledgement", body = SaveUserOutcome),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn save_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SaveUserDto>,
) -> Result<Json<SaveUserOutcome>, AppError> {
    let outcome = UserService::save_user(&state.store, dto).await?;
    Ok(Json(outcome))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list_users(&state.store).await?;
    Ok(Json(users))
}

#[utoipa::path(
    patch,
    path = "/user/update-role/{email}",
    params(("email" = String, Path, description = "Email of the user to update")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UpdateResult),
        (status = 400, description = "Unknown role", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user, dto), fields(admin = %auth_user.email()))]
pub async fn update_role(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateRoleDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = UserService::update_role(&state.store, &email, dto).await?;
    Ok(Json(result))
}
