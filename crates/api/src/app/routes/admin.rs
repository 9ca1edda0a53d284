//! Admin-only endpoints.

use axum::{Json, Router, routing::get};

use crate::app::dto::SuccessResponse;
use crate::app::routes::ADMIN_LEVELS;
use crate::authz::{self, Denied};
use crate::context::Identity;

pub fn router() -> Router {
    Router::new().route("/test", get(test))
}

/// GET /admin/test
pub async fn test(identity: Identity) -> Result<Json<SuccessResponse>, Denied> {
    authz::require(&identity, ADMIN_LEVELS)?;

    Ok(Json(SuccessResponse { success: true }))
}
