use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::professionals::handlers;
use crate::features::professionals::services::ProfessionalService;

/// Create routes for the professionals feature
pub fn routes(service: Arc<ProfessionalService>) -> Router {
    Router::new()
        .route(
            "/api/professionals",
            post(handlers::create_professional).get(handlers::list_professionals),
        )
        .with_state(service)
}
