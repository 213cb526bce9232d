use std::env;

#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// Processor secret key. Payment intents fail with a server error when unset.
    pub secret_key: Option<String>,
    pub currency: String,
    pub api_base: String,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SECRET_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            currency: env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "usd".to_string()),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            currency: "usd".to_string(),
            api_base: "https://api.stripe.com".to_string(),
        }
    }
}
