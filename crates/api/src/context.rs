use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use turnstile_auth::User;

/// Resolved identity for a request.
///
/// Inserted by the identity middleware and dropped with the request. A
/// request that never went through the middleware is anonymous.
#[derive(Debug, Clone, Default)]
pub struct Identity(Option<User>);

impl Identity {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn authenticated(user: User) -> Self {
        Self(Some(user))
    }

    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Identity>().cloned().unwrap_or_default())
    }
}
