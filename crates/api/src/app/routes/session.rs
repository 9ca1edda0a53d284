//! Login: credentials in, bearer token out.

use axum::{
    Extension, Form, Json,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use turnstile_auth::AuthService;

use crate::app::dto::{LoginRequest, LoginResponse};
use crate::app::errors;

/// Login body parsed from JSON or urlencoded form, by content type.
///
/// Any other content type yields empty credentials (and a failed login).
pub struct LoginBody(pub LoginRequest);

#[axum::async_trait]
impl<S> FromRequest<S> for LoginBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "unreadable login body");
                    errors::internal_error()
                })?;
            Ok(Self(body))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "unreadable login form");
                    errors::internal_error()
                })?;
            Ok(Self(body))
        } else {
            Ok(Self(LoginRequest::default()))
        }
    }
}

/// POST /login
///
/// A failed login is still 200, with `Success: false`.
pub async fn login(
    Extension(auth): Extension<AuthService>,
    LoginBody(body): LoginBody,
) -> Response {
    tracing::info!(username = %body.username, password = "<hidden>", "logging in");

    match auth.login(&body.username, &body.password) {
        Some(token) => (
            StatusCode::OK,
            [(header::AUTHORIZATION, token.clone())],
            Json(LoginResponse::issued(token)),
        )
            .into_response(),
        None => (StatusCode::OK, Json(LoginResponse::failed())).into_response(),
    }
}
