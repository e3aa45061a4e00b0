use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dto as auth_dto, handlers as auth_handlers, model as auth_model};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::professionals::{
    dtos as professionals_dtos, handlers as professionals_handlers,
};
use crate::features::services::{
    dtos as services_dtos, handlers as services_handlers, models as services_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::get_me,
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        // Professionals
        professionals_handlers::create_professional,
        professionals_handlers::list_professionals,
        // Services
        services_handlers::create_service,
        services_handlers::list_services,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_model::AuthenticatedUser,
            auth_dto::MeResponseDto,
            ApiResponse<auth_dto::MeResponseDto>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Professionals
            professionals_dtos::CreateProfessionalDto,
            professionals_dtos::ProfessionalResponseDto,
            ApiResponse<professionals_dtos::ProfessionalResponseDto>,
            ApiResponse<Vec<professionals_dtos::ProfessionalResponseDto>>,
            // Services
            services_models::ServiceStatus,
            services_dtos::CreateServiceDto,
            services_dtos::ServiceResponseDto,
            services_dtos::RelatedCategoryDto,
            services_dtos::RelatedProfessionalDto,
            services_dtos::ServiceListItemDto,
            ApiResponse<services_dtos::ServiceResponseDto>,
            ApiResponse<Vec<services_dtos::ServiceListItemDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Signed-in staff identity"),
        (name = "categories", description = "Service categories"),
        (name = "professionals", description = "Salon professionals"),
        (name = "services", description = "Bookable services"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Urban Glow API",
        version = "0.1.0",
        description = "API documentation for the Urban Glow dashboard",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
