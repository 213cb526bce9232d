use axum_extra::extract::cookie::{Cookie, SameSite};
use stayvista_auth::issue_token;
use stayvista_config::{CookieConfig, CookieSameSite, JwtConfig};
use stayvista_core::AppError;
use tracing::instrument;

use crate::metrics::track_credential_issued;

pub struct AuthService;

impl AuthService {
    /// Signs a credential for `email` and wraps it in the session cookie.
    #[instrument(skip(jwt_config))]
    pub fn issue_credential(
        email: &str,
        jwt_config: &JwtConfig,
    ) -> Result<Cookie<'static>, AppError> {
        let token = issue_token(email, jwt_config)?;
        track_credential_issued();
        tracing::info!("Credential issued");

        Ok(Self::credential_cookie(&jwt_config.cookie, token))
    }

    /// HTTP-only session cookie. No max-age is set; the credential's own
    /// expiry bounds its validity.
    pub fn credential_cookie(config: &CookieConfig, token: String) -> Cookie<'static> {
        Cookie::build((config.name.clone(), token))
            .path("/")
            .http_only(true)
            .secure(config.secure)
            .same_site(same_site(config.same_site))
            .build()
    }

    /// Expired, empty cookie carrying the same attributes as the session
    /// cookie, so browsers replace and drop it.
    pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
        let mut cookie = Self::credential_cookie(config, String::new());
        cookie.make_removal();
        cookie
    }
}

fn same_site(policy: CookieSameSite) -> SameSite {
    match policy {
        CookieSameSite::Strict => SameSite::Strict,
        CookieSameSite::None => SameSite::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayvista_config::Environment;

    #[test]
    fn test_development_cookie_is_strict_and_not_secure() {
        let config = CookieConfig::for_environment("token", Environment::Development);
        let cookie = AuthService::credential_cookie(&config, "abc".into());

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn test_production_cookie_is_cross_site() {
        let config = CookieConfig::for_environment("token", Environment::Production);
        let cookie = AuthService::credential_cookie(&config, "abc".into());

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn test_removal_cookie_keeps_attributes() {
        let config = CookieConfig::for_environment("token", Environment::Production);
        let cookie = AuthService::removal_cookie(&config);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age().map(|age| age.whole_seconds()), Some(0));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_issue_credential_requires_secret() {
        let config = JwtConfig {
            secret: String::new(),
            token_expiry: 60,
            cookie: CookieConfig::default(),
        };
        assert!(AuthService::issue_credential("a@x.com", &config).is_err());
    }
}
