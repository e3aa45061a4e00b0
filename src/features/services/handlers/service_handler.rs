use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::services::dtos::{CreateServiceDto, ServiceListItemDto, ServiceResponseDto};
use crate::features::services::services::ServiceService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// Create a new service
#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = ApiResponse<ServiceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Database error")
    ),
    security(("bearer_auth" = [])),
    tag = "services"
)]
pub async fn create_service(
    State(service): State<Arc<ServiceService>>,
    AppJson(dto): AppJson<CreateServiceDto>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Service created successfully".to_string()),
            None,
        )),
    ))
}

/// List services with their joined category title and professional name
#[utoipa::path(
    get,
    path = "/api/services",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of services", body = ApiResponse<Vec<ServiceListItemDto>>),
        (status = 500, description = "Database error")
    ),
    security(("bearer_auth" = [])),
    tag = "services"
)]
pub async fn list_services(
    State(service): State<Arc<ServiceService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ServiceListItemDto>>>> {
    let services = service.list(&pagination).await?;
    Ok(Json(ApiResponse::success(Some(services), None, None)))
}
