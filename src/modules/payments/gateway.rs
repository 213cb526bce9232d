use std::fmt::Debug;

use async_trait::async_trait;
use serde::Deserialize;
use stayvista_config::PaymentConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment processor secret key is not configured")]
    NotConfigured,
    #[error("payment processor request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("payment processor rejected the request ({status}): {message}")]
    Processor { status: u16, message: String },
    #[error("payment processor response carried no client secret")]
    MissingSecret,
}

/// Creates payment intents with an external processor and hands back the
/// client secret the browser completes the payment with.
#[async_trait]
pub trait PaymentGateway: Send + Sync + Debug {
    /// `amount` is in minor currency units.
    async fn create_payment_intent(&self, amount: u64) -> Result<String, PaymentError>;
}

#[derive(Debug, Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    config: PaymentConfig,
}

#[derive(Deserialize)]
struct IntentBody {
    client_secret: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl StripeGateway {
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(&self, amount: u64) -> Result<String, PaymentError> {
        let secret_key = self
            .config
            .secret_key
            .as_deref()
            .ok_or(PaymentError::NotConfigured)?;

        let amount = amount.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", self.config.currency.as_str()),
            ("automatic_payment_methods[enabled]", "true"),
        ];

        let url = format!(
            "{}/v1/payment_intents",
            self.config.api_base.trim_end_matches('/')
        );
        let response = self
            .client
            .post(url)
            .bearer_auth(secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or(text);
            return Err(PaymentError::Processor {
                status: status.as_u16(),
                message,
            });
        }

        let body: IntentBody = response.json().await?;
        body.client_secret.ok_or(PaymentError::MissingSecret)
    }
}
