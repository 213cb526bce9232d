use std::sync::Arc;

use anyhow::anyhow;
use stayvista_core::AppError;
use stayvista_models::payments::{PaymentIntentRequest, PaymentIntentResponse};
use tracing::instrument;

use crate::metrics::track_payment_intent;
use crate::modules::payments::gateway::PaymentGateway;

pub struct PaymentService;

impl PaymentService {
    #[instrument(skip(gateway, request))]
    pub async fn create_payment_intent(
        gateway: &Arc<dyn PaymentGateway>,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, AppError> {
        let amount = request
            .minor_units()
            .ok_or_else(|| AppError::bad_request(anyhow!("price must be a positive amount")))?;

        match gateway.create_payment_intent(amount).await {
            Ok(client_secret) => {
                track_payment_intent(true);
                tracing::info!(amount, "Payment intent created");
                Ok(PaymentIntentResponse { client_secret })
            }
            Err(err) => {
                track_payment_intent(false);
                Err(AppError::internal(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::payments::gateway::PaymentError;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingGateway {
        amounts: Mutex<Vec<u64>>,
        fail: bool,
    }

    #[async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn create_payment_intent(&self, amount: u64) -> Result<String, PaymentError> {
            self.amounts.lock().unwrap().push(amount);
            if self.fail {
                return Err(PaymentError::NotConfigured);
            }
            Ok(format!("pi_{amount}_secret"))
        }
    }

    #[tokio::test]
    async fn test_amount_is_sent_in_minor_units() {
        let recorder = Arc::new(RecordingGateway::default());
        let gateway: Arc<dyn PaymentGateway> = recorder.clone();
        let request = PaymentIntentRequest { price: Some(120.5) };

        let response = PaymentService::create_payment_intent(&gateway, &request)
            .await
            .unwrap();

        assert_eq!(response.client_secret, "pi_12050_secret");
        assert_eq!(*recorder.amounts.lock().unwrap(), vec![12050]);
    }

    #[tokio::test]
    async fn test_missing_price_never_reaches_processor() {
        let recorder = Arc::new(RecordingGateway::default());
        let gateway: Arc<dyn PaymentGateway> = recorder.clone();
        let request = PaymentIntentRequest { price: None };

        let err = PaymentService::create_payment_intent(&gateway, &request)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(recorder.amounts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_processor_failure_is_server_error() {
        let gateway: Arc<dyn PaymentGateway> = Arc::new(RecordingGateway {
            fail: true,
            ..Default::default()
        });
        let request = PaymentIntentRequest { price: Some(10.0) };

        let err = PaymentService::create_payment_intent(&gateway, &request)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
