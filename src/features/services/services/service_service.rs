use std::sync::Arc;

use crate::core::error::Result;
use crate::features::services::dtos::{CreateServiceDto, ServiceListItemDto, ServiceResponseDto};
use crate::features::services::models::NewService;
use crate::modules::store::CatalogStore;
use crate::shared::types::PaginationQuery;

/// Service for catalog service operations.
///
/// Both operations let persistence failures propagate, unlike the category
/// and professional features.
pub struct ServiceService {
    store: Arc<dyn CatalogStore>,
}

impl ServiceService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a new service; starts as `pending`, foreign keys may be null.
    pub async fn create(&self, dto: CreateServiceDto) -> Result<ServiceResponseDto> {
        let data = NewService {
            title: dto.title,
            client_name: dto.client_name,
            description: dto.description,
            price: dto.price,
            category_id: dto.category_id,
            professional_id: dto.professional_id,
        };

        let service = self.store.insert_service(data).await.map_err(|e| {
            tracing::error!("Failed to create service: {}", e);
            e
        })?;

        tracing::info!(
            "Service created: id={}, title={}, status={}",
            service.id,
            service.title,
            service.status
        );

        Ok(service.into())
    }

    /// List services (paged), each joined with its category title and
    /// professional name.
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<Vec<ServiceListItemDto>> {
        let services = self
            .store
            .list_services(pagination.limit(), pagination.offset())
            .await
            .map_err(|e| {
                tracing::error!("Failed to list services: {}", e);
                e
            })?;

        Ok(services.into_iter().map(|s| s.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::dtos::CreateCategoryDto;
    use crate::features::categories::services::CategoryService;
    use crate::features::professionals::dtos::CreateProfessionalDto;
    use crate::features::professionals::services::ProfessionalService;
    use crate::features::services::models::ServiceStatus;
    use crate::shared::test_helpers::InMemoryCatalogStore;

    fn service_dto(title: &str) -> CreateServiceDto {
        CreateServiceDto {
            title: title.to_string(),
            client_name: "Ana".to_string(),
            description: "Corte clásico".to_string(),
            price: 25000.0,
            category_id: None,
            professional_id: None,
        }
    }

    #[tokio::test]
    async fn test_list_on_empty_table_is_empty_not_error() {
        let svc = ServiceService::new(Arc::new(InMemoryCatalogStore::new()));

        let services = svc.list(&PaginationQuery::default()).await.unwrap();
        assert!(services.is_empty());
    }

    #[tokio::test]
    async fn test_create_defaults_to_pending_without_relations() {
        let svc = ServiceService::new(Arc::new(InMemoryCatalogStore::new()));

        let created = svc.create(service_dto("Corte")).await.unwrap();
        assert_eq!(created.status, ServiceStatus::Pending);
        assert!(created.category_id.is_none());
        assert!(created.professional_id.is_none());

        let listed = svc.list(&PaginationQuery::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].category.is_none());
        assert!(listed[0].professional.is_none());
    }

    #[tokio::test]
    async fn test_list_joins_professional_without_category() {
        let store = Arc::new(InMemoryCatalogStore::new());
        let professionals = ProfessionalService::new(store.clone());
        let svc = ServiceService::new(store);

        let professional = professionals
            .create(CreateProfessionalDto {
                full_name: "Juan Pérez".to_string(),
                city: "Medellín".to_string(),
                specialty: "Estilista".to_string(),
                contact: 3001234567,
                photo: None,
            })
            .await
            .unwrap();

        let mut dto = service_dto("Corte");
        dto.professional_id = Some(professional.id);
        svc.create(dto).await.unwrap();

        let listed = svc.list(&PaginationQuery::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].category.is_none());
        assert_eq!(
            listed[0].professional.as_ref().unwrap().full_name,
            "Juan Pérez"
        );
    }

    #[tokio::test]
    async fn test_full_catalog_scenario() {
        let store = Arc::new(InMemoryCatalogStore::new());
        let categories = CategoryService::new(store.clone());
        let professionals = ProfessionalService::new(store.clone());
        let svc = ServiceService::new(store);

        let category = categories
            .create(CreateCategoryDto {
                title: "Peluquería".to_string(),
            })
            .await
            .unwrap();
        let professional = professionals
            .create(CreateProfessionalDto {
                full_name: "Juan Pérez".to_string(),
                city: "Medellín".to_string(),
                specialty: "Estilista".to_string(),
                contact: 3001234567,
                photo: None,
            })
            .await
            .unwrap();

        let mut dto = service_dto("Corte");
        dto.category_id = Some(category.id);
        dto.professional_id = Some(professional.id);
        svc.create(dto).await.unwrap();

        let listed = svc.list(&PaginationQuery::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        let item = &listed[0];
        assert_eq!(item.title, "Corte");
        assert_eq!(item.client_name, "Ana");
        assert_eq!(item.price, 25000.0);
        assert_eq!(item.category.as_ref().unwrap().title, "Peluquería");
        assert_eq!(item.professional.as_ref().unwrap().full_name, "Juan Pérez");
    }

    #[tokio::test]
    async fn test_failures_propagate() {
        let svc = ServiceService::new(Arc::new(InMemoryCatalogStore::failing()));

        assert!(svc.create(service_dto("Corte")).await.is_err());
        assert!(svc.list(&PaginationQuery::default()).await.is_err());
    }
}
