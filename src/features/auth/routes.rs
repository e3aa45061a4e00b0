use axum::{routing::get, Router};

use crate::features::auth::handlers;

/// Routes for the auth feature; mounted behind the JWT guard
pub fn routes() -> Router {
    Router::new().route("/api/auth/me", get(handlers::get_me))
}
