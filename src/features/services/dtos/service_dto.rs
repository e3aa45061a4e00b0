use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::services::models::{Service, ServiceStatus, ServiceWithRelations};

/// Request DTO for creating a service
///
/// `status` is not accepted here; new services always start as `pending`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    /// Name of the end client requesting the service
    #[validate(length(min = 1, max = 255, message = "Client name is required"))]
    pub client_name: String,

    #[validate(length(min = 1, max = 2000, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub category_id: Option<Uuid>,
    pub professional_id: Option<Uuid>,
}

/// Response DTO for a created service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceResponseDto {
    pub id: Uuid,
    pub title: String,
    pub client_name: String,
    pub description: String,
    pub price: f64,
    pub status: ServiceStatus,
    pub category_id: Option<Uuid>,
    pub professional_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceResponseDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            title: s.title,
            client_name: s.client_name,
            description: s.description,
            price: s.price,
            status: s.status,
            category_id: s.category_id,
            professional_id: s.professional_id,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Joined category, title only
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelatedCategoryDto {
    pub title: String,
}

/// Joined professional, name only
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelatedProfessionalDto {
    pub full_name: String,
}

/// Response DTO for the service listing: the service plus its joined
/// category title and professional name, each absent when the foreign key
/// is null.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceListItemDto {
    pub id: Uuid,
    pub title: String,
    pub client_name: String,
    pub description: String,
    pub price: f64,
    pub status: ServiceStatus,
    pub category: Option<RelatedCategoryDto>,
    pub professional: Option<RelatedProfessionalDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceWithRelations> for ServiceListItemDto {
    fn from(row: ServiceWithRelations) -> Self {
        let s = row.service;
        Self {
            id: s.id,
            title: s.title,
            client_name: s.client_name,
            description: s.description,
            price: s.price,
            status: s.status,
            category: row.category_title.map(|title| RelatedCategoryDto { title }),
            professional: row
                .professional_name
                .map(|full_name| RelatedProfessionalDto { full_name }),
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
