use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::auth::require_auth;
use crate::middleware::role::{require_admin, require_host};
use crate::modules::auth::router::init_auth_router;
use crate::modules::bookings::router::{init_bookings_auth_router, init_bookings_host_router};
use crate::modules::payments::router::init_payments_router;
use crate::modules::reviews::router::{init_reviews_auth_router, init_reviews_public_router};
use crate::modules::rooms::router::{
    init_rooms_auth_router, init_rooms_host_router, init_rooms_public_router,
};
use crate::modules::stats::router::{
    init_stats_admin_router, init_stats_auth_router, init_stats_host_router,
};
use crate::modules::users::router::{
    init_users_admin_router, init_users_auth_router, init_users_public_router,
};
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

async fn health() -> &'static str {
    "Hello from StayVista Server.."
}

pub fn init_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(health))
        .merge(init_auth_router())
        .merge(init_rooms_public_router())
        .merge(init_users_public_router())
        .merge(init_reviews_public_router());

    let authenticated = Router::new()
        .merge(init_users_auth_router())
        .merge(init_rooms_auth_router())
        .merge(init_bookings_auth_router())
        .merge(init_reviews_auth_router())
        .merge(init_payments_router())
        .merge(init_stats_auth_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let host = Router::new()
        .merge(init_rooms_host_router())
        .merge(init_bookings_host_router())
        .merge(init_stats_host_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_host));

    let admin = Router::new()
        .merge(init_users_admin_router())
        .merge(init_stats_admin_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(public)
        .merge(authenticated)
        .merge(host)
        .merge(admin)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
