use std::env;

use anyhow::{Context, bail};

use crate::cookie::CookieConfig;

/// 365 days.
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
    pub cookie: CookieConfig,
}

impl JwtConfig {
    /// Loads the signing configuration. A missing secret is fatal: the server
    /// cannot issue or verify any credential without it.
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("ACCESS_TOKEN_SECRET")
            .or_else(|_| env::var("JWT_SECRET"))
            .context("ACCESS_TOKEN_SECRET must be set")?;

        if secret.trim().is_empty() {
            bail!("ACCESS_TOKEN_SECRET must not be empty");
        }

        let token_expiry = env::var("TOKEN_EXPIRY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|secs: &i64| *secs > 0)
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECS);

        Ok(Self {
            secret,
            token_expiry,
            cookie: CookieConfig::from_env(),
        })
    }
}
