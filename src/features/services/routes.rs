use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::services::handlers;
use crate::features::services::services::ServiceService;

/// Create routes for the services feature
pub fn routes(service: Arc<ServiceService>) -> Router {
    Router::new()
        .route(
            "/api/services",
            post(handlers::create_service).get(handlers::list_services),
        )
        .with_state(service)
}
