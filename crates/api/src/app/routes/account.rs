use axum::Json;

use turnstile_auth::{AccessDenied, AccessLevel};

use crate::app::dto::UserNameResponse;
use crate::app::routes::MEMBER_LEVELS;
use crate::authz::{self, Denied};
use crate::context::Identity;

/// GET /me - guarded inline.
pub async fn me(identity: Identity) -> Result<Json<UserNameResponse>, Denied> {
    let user = authz::require_user(&identity, MEMBER_LEVELS)?;

    Ok(Json(UserNameResponse {
        user_name: user.name.clone(),
    }))
}

/// GET /me2 - guarded by `require_access_level` in front of it.
pub async fn me2(identity: Identity) -> Result<Json<UserNameResponse>, Denied> {
    let Some(user) = identity.user() else {
        return Err(Denied(AccessDenied {
            actual: AccessLevel::Anonymous,
        }));
    };

    Ok(Json(UserNameResponse {
        user_name: user.name.clone(),
    }))
}
