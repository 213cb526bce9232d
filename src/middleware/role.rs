//! Role-based authorization gates.
//!
//! Two forms of the same check:
//! 1. Layer-based middleware ([`require_admin`], [`require_host`]) for route groups
//! 2. The [`RequireHost`] extractor for a handler that shares its path with
//!    ungated methods
//!
//! Both authenticate first, resolve the caller's stored role with one lookup,
//! and grant only on strict equality with the required role.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use stayvista_auth::{UserRole, authorize_role};
use stayvista_core::AppError;

use crate::metrics::track_authorization_check;
use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Message returned for every authorization denial.
pub const FORBIDDEN_MESSAGE: &str = "Forbidden access";

/// Checks that the authenticated caller's stored role equals `required`.
pub async fn check_role(
    state: &AppState,
    auth_user: &AuthUser,
    required: UserRole,
) -> Result<(), AppError> {
    let stored = UserService::resolve_role(&state.store, auth_user.email()).await?;
    let allowed = authorize_role(stored, required);
    track_authorization_check(required.as_str(), allowed);

    if !allowed {
        tracing::warn!(
            email = %auth_user.email(),
            required = %required,
            stored = ?stored,
            "Authorization denied"
        );
        return Err(AppError::forbidden(FORBIDDEN_MESSAGE));
    }

    Ok(())
}

pub async fn require_role(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    required: UserRole,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_role(&state, &auth_user, required).await?;

    parts.extensions.insert(auth_user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Admin gate for route groups.
///
/// ```rust,ignore
/// Router::new()
///     .route("/users", get(get_users))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, req, next, UserRole::Admin).await
}

/// Host gate for route groups.
pub async fn require_host(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, req, next, UserRole::Host).await
}

#[derive(Debug, Clone)]
pub struct RequireHost(pub AuthUser);

impl FromRequestParts<AppState> for RequireHost {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_role(state, &auth_user, UserRole::Host).await?;
        Ok(RequireHost(auth_user))
    }
}
