use std::env;

/// Deployment environment, read from `NODE_ENV` (or `APP_ENV`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let value = env::var("NODE_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_default();
        Self::parse(&value)
    }

    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CookieSameSite {
    Strict,
    None,
}

/// Attributes for the credential cookie.
///
/// Production deployments serve the frontend from another origin, so the cookie
/// must be `Secure` with `SameSite=None` to be delivered cross-site. Everywhere
/// else it stays same-site strict and may travel over plain HTTP.
#[derive(Clone, Debug)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub same_site: CookieSameSite,
}

impl CookieConfig {
    pub fn for_environment(name: impl Into<String>, environment: Environment) -> Self {
        let production = environment.is_production();
        Self {
            name: name.into(),
            secure: production,
            same_site: if production {
                CookieSameSite::None
            } else {
                CookieSameSite::Strict
            },
        }
    }

    pub fn from_env() -> Self {
        let name = env::var("TOKEN_COOKIE_NAME").unwrap_or_else(|_| "token".to_string());
        Self::for_environment(name, Environment::from_env())
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self::for_environment("token", Environment::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_cookie_is_cross_site() {
        let config = CookieConfig::for_environment("token", Environment::Production);
        assert!(config.secure);
        assert_eq!(config.same_site, CookieSameSite::None);
    }

    #[test]
    fn test_development_cookie_is_strict() {
        let config = CookieConfig::for_environment("token", Environment::Development);
        assert!(!config.secure);
        assert_eq!(config.same_site, CookieSameSite::Strict);
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse(" PRODUCTION "), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Development);
        assert_eq!(Environment::parse(""), Environment::Development);
    }
}
