use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use stayvista_auth::{Claims, verify_token};
use stayvista_auth::jwt::UNAUTHORIZED_MESSAGE;
use stayvista_core::AppError;

use crate::metrics::track_credential_verification;
use crate::middleware::role::FORBIDDEN_MESSAGE;
use crate::state::AppState;

/// Extractor for the verified identity claim of the caller.
///
/// Reads the claim attached by [`require_auth`] when the route sits behind a
/// gate, otherwise verifies the credential cookie itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Rejects with 403 unless `email` names the caller.
    pub fn ensure_is(&self, email: &str) -> Result<(), AppError> {
        if self.email() == email {
            Ok(())
        } else {
            Err(AppError::forbidden(FORBIDDEN_MESSAGE))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.jwt_config.cookie.name)
            .map(|cookie| cookie.value().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::unauthorized(UNAUTHORIZED_MESSAGE))?;

        let claims = verify_token(&token, &state.jwt_config);
        track_credential_verification(claims.is_ok());

        Ok(AuthUser(claims?))
    }
}

/// Authentication gate. Verifies the credential cookie and attaches the
/// claim to the request; performs no persistence I/O.
pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    parts.extensions.insert(auth_user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_user(email: &str) -> AuthUser {
        AuthUser(Claims {
            email: email.to_string(),
            exp: 9_999_999_999,
            iat: 1_700_000_000,
        })
    }

    #[test]
    fn test_ensure_is_matches_caller_only() {
        let user = auth_user("guest@example.com");

        assert!(user.ensure_is("guest@example.com").is_ok());

        let err = user.ensure_is("other@example.com").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
        assert_eq!(err.error.to_string(), FORBIDDEN_MESSAGE);
    }
}
