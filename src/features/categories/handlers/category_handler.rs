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
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// Create a new category
///
/// A persistence failure here surfaces as a generic error envelope with no
/// detail; the dashboard shows a localized toast either way.
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Category could not be created")
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    match service.create(dto).await {
        Some(category) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(category),
                Some("Category created successfully".to_string()),
                None,
            )),
        )
            .into_response()),
        None => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(
                Some("Failed to create category".to_string()),
                None,
            )),
        )
            .into_response()),
    }
}

/// List categories
#[utoipa::path(
    get,
    path = "/api/categories",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list(&pagination).await?;
    Ok(Json(ApiResponse::success(Some(categories), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::routes;
    use crate::shared::test_helpers::InMemoryCatalogStore;
    use axum_test::TestServer;
    use serde_json::json;

    fn server(store: Arc<InMemoryCatalogStore>) -> TestServer {
        let service = Arc::new(CategoryService::new(store));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_roundtrip() {
        let server = server(Arc::new(InMemoryCatalogStore::new()));

        let response = server
            .post("/api/categories")
            .json(&json!({ "title": "Peluquería" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: ApiResponse<CategoryResponseDto> = response.json();
        assert!(body.success);
        assert_eq!(body.data.unwrap().title, "Peluquería");

        let response = server.get("/api/categories").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<CategoryResponseDto>> = response.json();
        let categories = body.data.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Peluquería");
    }

    #[tokio::test]
    async fn test_create_rejects_short_title() {
        let server = server(Arc::new(InMemoryCatalogStore::new()));

        let response = server
            .post("/api/categories")
            .json(&json!({ "title": "P" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_failure_is_generic() {
        let server = server(Arc::new(InMemoryCatalogStore::failing()));

        let response = server
            .post("/api/categories")
            .json(&json!({ "title": "Peluquería" }))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("Failed to create category"));
    }
}
