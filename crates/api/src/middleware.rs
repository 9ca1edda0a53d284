use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use turnstile_auth::{AccessLevel, AuthService};

use crate::authz;
use crate::context::Identity;

#[derive(Clone)]
pub struct AuthState {
    pub auth: AuthService,
}

/// Resolve the bearer token (if any) into an [`Identity`] for the request.
///
/// Never rejects: an invalid token just leaves the request anonymous, and
/// the route decides whether that is acceptable.
pub async fn identity_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let identity = match extract_bearer(req.headers()) {
        Some(token) => match state.auth.resolve_identity(token) {
            Some(user) => Identity::authenticated(user),
            None => {
                tracing::info!("bearer token present but not valid");
                Identity::anonymous()
            }
        },
        None => Identity::anonymous(),
    };

    req.extensions_mut().insert(identity);
    next.run(req).await
}

/// Access levels a gated route accepts.
#[derive(Debug, Clone, Copy)]
pub struct RequiredLevels(pub &'static [AccessLevel]);

/// Pre-handler gate: continue to the handler or short-circuit with 401.
pub async fn require_access_level(
    State(RequiredLevels(required)): State<RequiredLevels>,
    identity: Identity,
    req: Request,
    next: Next,
) -> Response {
    match authz::require(&identity, required) {
        Ok(_) => next.run(req).await,
        Err(denied) => denied.into_response(),
    }
}

/// The raw token after `"Bearer "`, exactly as sent.
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
