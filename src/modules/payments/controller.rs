use axum::{Json, extract::State};
use stayvista_core::{AppError, ErrorResponse};
use stayvista_models::payments::{PaymentIntentRequest, PaymentIntentResponse};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = PaymentIntentRequest,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentResponse),
        (status = 400, description = "Missing or non-positive price", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Payment processor failure", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state, auth_user, request), fields(payer = %auth_user.email()))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(request): Json<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let response = PaymentService::create_payment_intent(&state.payments, &request).await?;
    Ok(Json(response))
}
