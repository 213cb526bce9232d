use crate::modules::payments::controller::create_payment_intent;
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_payments_router() -> Router<AppState> {
    Router::new().route("/create-payment-intent", post(create_payment_intent))
}
