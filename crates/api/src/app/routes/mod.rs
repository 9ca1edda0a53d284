use std::collections::BTreeMap;

use axum::{
    Router,
    routing::{get, post},
};

use turnstile_auth::AccessLevel;

use crate::middleware::{RequiredLevels, require_access_level};

pub mod account;
pub mod admin;
pub mod session;
pub mod system;

/// Levels accepted by the `/me` routes.
pub const MEMBER_LEVELS: &[AccessLevel] = &[AccessLevel::User, AccessLevel::Admin];

/// Levels accepted by `/admin/*`.
pub const ADMIN_LEVELS: &[AccessLevel] = &[AccessLevel::Admin];

/// Every registered (method, path) pair, used for the startup listing.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/ping"),
    ("POST", "/login"),
    ("GET", "/me"),
    ("GET", "/me2"),
    ("GET", "/admin/test"),
];

pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/ping", get(system::ping))
        .route("/login", post(session::login))
        // Inline guard inside the handler.
        .route("/me", get(account::me))
        // Same check as a gate in front of the handler.
        .route(
            "/me2",
            get(account::me2).route_layer(axum::middleware::from_fn_with_state(
                RequiredLevels(MEMBER_LEVELS),
                require_access_level,
            )),
        )
        .nest("/admin", admin::router())
}

/// Compact route listing: one line per path, methods joined by `|`.
pub fn route_summary() -> Vec<String> {
    let mut by_path: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for &(method, path) in ROUTES {
        let methods = by_path.entry(path).or_default();
        if !methods.contains(&method) {
            methods.push(method);
        }
    }

    by_path
        .into_iter()
        .map(|(path, methods)| format!("{} {}", methods.join("|"), path))
        .collect()
}

pub fn log_routes() {
    tracing::info!("printing routes");
    for line in route_summary() {
        tracing::debug!("{line}");
    }
}
