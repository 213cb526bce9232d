use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use stayvista_core::{AppError, ErrorResponse};
use stayvista_models::auth::{SuccessResponse, TokenRequest};
use tracing::instrument;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Issue a session credential
///
/// Signs the submitted identity and sets it as the HTTP-only `token` cookie.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Credential cookie set", body = SuccessResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto), fields(email = %dto.email))]
pub async fn issue_credential(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<TokenRequest>,
) -> Result<(CookieJar, Json<SuccessResponse>), AppError> {
    let cookie = AuthService::issue_credential(&dto.email, &state.jwt_config)?;
    Ok((jar.add(cookie), Json(SuccessResponse::ok())))
}

/// Clear the session credential
///
/// Client-side only: a credential copied before logout stays valid until it expires.
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 200, description = "Credential cookie cleared", body = SuccessResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let cookie = AuthService::removal_cookie(&state.jwt_config.cookie);
    tracing::info!("Logout successful");
    (jar.add(cookie), Json(SuccessResponse::ok()))
}
