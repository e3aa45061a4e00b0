use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::professionals::dtos::{CreateProfessionalDto, ProfessionalResponseDto};
use crate::features::professionals::services::ProfessionalService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// Register a new professional
#[utoipa::path(
    post,
    path = "/api/professionals",
    request_body = CreateProfessionalDto,
    responses(
        (status = 201, description = "Professional registered", body = ApiResponse<ProfessionalResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Professional could not be registered")
    ),
    security(("bearer_auth" = [])),
    tag = "professionals"
)]
pub async fn create_professional(
    State(service): State<Arc<ProfessionalService>>,
    AppJson(dto): AppJson<CreateProfessionalDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    match service.create(dto).await {
        Some(professional) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(professional),
                Some("Professional registered successfully".to_string()),
                None,
            )),
        )
            .into_response()),
        None => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(
                Some("Failed to register professional".to_string()),
                None,
            )),
        )
            .into_response()),
    }
}

/// List professionals
///
/// A failed read resolves to a generic error envelope rather than a raised
/// database error; see [`ProfessionalService::list`].
#[utoipa::path(
    get,
    path = "/api/professionals",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of professionals", body = ApiResponse<Vec<ProfessionalResponseDto>>),
        (status = 500, description = "Professionals could not be listed")
    ),
    security(("bearer_auth" = [])),
    tag = "professionals"
)]
pub async fn list_professionals(
    State(service): State<Arc<ProfessionalService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Response> {
    match service.list(&pagination).await {
        Some(professionals) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(Some(professionals), None, None)),
        )
            .into_response()),
        None => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(
                Some("Failed to list professionals".to_string()),
                None,
            )),
        )
            .into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::professionals::routes;
    use crate::shared::test_helpers::InMemoryCatalogStore;
    use axum_test::TestServer;
    use serde_json::json;

    fn server(store: Arc<InMemoryCatalogStore>) -> TestServer {
        let service = Arc::new(ProfessionalService::new(store));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_roundtrip() {
        let server = server(Arc::new(InMemoryCatalogStore::new()));

        let response = server
            .post("/api/professionals")
            .json(&json!({
                "full_name": "Juan Pérez",
                "city": "Medellín",
                "specialty": "Estilista",
                "contact": 3001234567i64,
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let response = server.get("/api/professionals").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<ProfessionalResponseDto>> = response.json();
        let professionals = body.data.unwrap();
        assert_eq!(professionals.len(), 1);
        assert_eq!(professionals[0].full_name, "Juan Pérez");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_photo() {
        let server = server(Arc::new(InMemoryCatalogStore::new()));

        let response = server
            .post("/api/professionals")
            .json(&json!({
                "full_name": "Juan Pérez",
                "city": "Medellín",
                "specialty": "Estilista",
                "contact": 3001234567i64,
                "photo": "not-a-photo",
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_failure_is_generic() {
        let server = server(Arc::new(InMemoryCatalogStore::failing()));

        let response = server.get("/api/professionals").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(!body.success);
    }
}
