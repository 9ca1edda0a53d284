//! HTTP application wiring (Axum router + layers).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response bodies
//! - `errors.rs`: fallback and internal-error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{Method, header},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
};

use turnstile_auth::{AuthService, Hs256TokenCodec, InMemoryUserDirectory, TokenError};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router with the built-in user list.
pub fn build_app(config: &ApiConfig) -> Result<Router, TokenError> {
    let codec = Hs256TokenCodec::new(&config.jwt_secret)?;
    let auth = AuthService::new(
        Arc::new(InMemoryUserDirectory::with_default_users()),
        Arc::new(codec),
    )
    .with_ttl(config.token_ttl);

    Ok(build_app_with(auth))
}

/// Build the router around an already-wired auth service.
pub fn build_app_with(auth: AuthService) -> Router {
    let auth_state = middleware::AuthState { auth: auth.clone() };

    let app = routes::router()
        .fallback(errors::not_found)
        .layer(Extension(auth))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::identity_middleware,
        ));

    with_edge_layers(app)
}

/// CORS outermost, so panic responses carry CORS headers too.
fn with_edge_layers(app: Router) -> Router {
    app.layer(
        ServiceBuilder::new()
            .layer(cors_layer())
            .layer(CatchPanicLayer::custom(errors::handle_panic)),
    )
}

/// Any origin; the login token header is readable by browser clients.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([header::AUTHORIZATION])
}
