use axum::{
    Json,
    extract::{Path, State},
};
use stayvista_core::{AppError, ErrorResponse};
use stayvista_db::InsertOneResult;
use stayvista_models::reviews::{CreateReviewDto, Review};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::reviews::service::ReviewService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/review",
    request_body = CreateReviewDto,
    responses(
        (status = 200, description = "Review posted", body = InsertOneResult),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Reviewer never booked this room", body = ErrorResponse),
        (status = 409, description = "Room already reviewed by the caller", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Reviews"
)]
#[instrument(skip(state, auth_user, dto), fields(reviewer = %auth_user.email()))]
pub async fn create_review(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateReviewDto>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = ReviewService::create_review(&state.store, auth_user.email(), dto).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/reviews/{room_id}",
    params(("room_id" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Reviews of the room", body = Vec<Review>)
    ),
    tag = "Reviews"
)]
#[instrument(skip(state))]
pub async fn get_room_reviews(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = ReviewService::room_reviews(&state.store, &room_id).await?;
    Ok(Json(reviews))
}
