use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub database_url: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            metrics_port: env::var("METRICS_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(9100),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
        })
    }
}
