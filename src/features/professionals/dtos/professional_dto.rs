use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::professionals::models::Professional;
use crate::shared::photo::validate_photo_field;

/// Request DTO for registering a professional
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProfessionalDto {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, max = 255, message = "Specialty is required"))]
    pub specialty: String,

    /// Phone number as digits; the form parses it before submitting
    #[validate(range(min = 1, message = "Contact must be a positive phone number"))]
    pub contact: i64,

    /// Base64 data URI from the form's file reader, or an image URL
    #[validate(custom(function = validate_photo_field))]
    pub photo: Option<String>,
}

/// Response DTO for professional
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfessionalResponseDto {
    pub id: Uuid,
    pub full_name: String,
    pub city: String,
    pub specialty: String,
    pub contact: i64,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Professional> for ProfessionalResponseDto {
    fn from(p: Professional) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name,
            city: p.city,
            specialty: p.specialty,
            contact: p.contact,
            photo: p.photo,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
