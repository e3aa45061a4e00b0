use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            post(handlers::create_category).get(handlers::list_categories),
        )
        .with_state(service)
}
