use std::sync::Arc;

use stayvista_config::{CorsConfig, JwtConfig, PaymentConfig, ServerConfig};
use stayvista_db::DocumentStore;

use crate::modules::payments::gateway::{PaymentGateway, StripeGateway};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub payments: Arc<dyn PaymentGateway>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
            payments,
        }
    }
}

/// Builds the state from the environment. Fails when the signing secret is
/// missing or the document store cannot be reached.
pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env()?;
    let store = stayvista_db::connect(&server_config.database_url).await?;
    store.ping().await?;
    tracing::info!("Document store reachable");

    let payments = StripeGateway::new(PaymentConfig::from_env());

    Ok(AppState::new(
        store,
        jwt_config,
        CorsConfig::from_env(),
        Arc::new(payments),
    ))
}
