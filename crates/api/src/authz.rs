//! Inline access guards for handlers.
//!
//! Handlers return `Result<_, Denied>` and stop with `?`. The middleware gate
//! in [`crate::middleware`] renders the very same [`Denied`] response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use turnstile_auth::{AccessDenied, AccessLevel, User, authorize};

use crate::app::dto::DenialBody;
use crate::context::Identity;

/// A request that failed the access gate: 401 with a fixed JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denied(pub AccessDenied);

impl From<AccessDenied> for Denied {
    fn from(value: AccessDenied) -> Self {
        Self(value)
    }
}

impl IntoResponse for Denied {
    fn into_response(self) -> Response {
        tracing::debug!(level = %self.0.actual, "access denied");
        (StatusCode::UNAUTHORIZED, Json(DenialBody::access_denied())).into_response()
    }
}

/// Allow the request through if its identity holds one of `required`.
pub fn require<'a>(
    identity: &'a Identity,
    required: &[AccessLevel],
) -> Result<Option<&'a User>, Denied> {
    authorize(identity.user(), required)?;
    Ok(identity.user())
}

/// Like [`require`], but also insists on an authenticated user.
pub fn require_user<'a>(
    identity: &'a Identity,
    required: &[AccessLevel],
) -> Result<&'a User, Denied> {
    require(identity, required)?.ok_or(Denied(AccessDenied {
        actual: AccessLevel::Anonymous,
    }))
}
