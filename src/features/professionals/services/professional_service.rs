use std::sync::Arc;

use crate::features::professionals::dtos::{CreateProfessionalDto, ProfessionalResponseDto};
use crate::features::professionals::models::NewProfessional;
use crate::modules::store::CatalogStore;
use crate::shared::types::PaginationQuery;

/// Service for professional operations.
///
/// Both operations swallow persistence failures (log, return `None`); the
/// dashboard treats a missing value as a generic failure and shows a toast.
pub struct ProfessionalService {
    store: Arc<dyn CatalogStore>,
}

impl ProfessionalService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Register a new professional. `contact` is already numeric here; the
    /// form is responsible for parsing what the user typed.
    pub async fn create(&self, dto: CreateProfessionalDto) -> Option<ProfessionalResponseDto> {
        let data = NewProfessional {
            full_name: dto.full_name,
            city: dto.city,
            specialty: dto.specialty,
            contact: dto.contact,
            photo: dto.photo,
        };

        match self.store.insert_professional(data).await {
            Ok(professional) => {
                tracing::info!(
                    "Professional registered: id={}, name={}",
                    professional.id,
                    professional.full_name
                );
                Some(professional.into())
            }
            Err(e) => {
                tracing::error!("Failed to register professional: {}", e);
                None
            }
        }
    }

    /// List professionals (paged).
    ///
    /// Returns `None` on failure, not an empty list — callers must treat the
    /// result as possibly absent rather than iterate blindly.
    pub async fn list(&self, pagination: &PaginationQuery) -> Option<Vec<ProfessionalResponseDto>> {
        match self
            .store
            .list_professionals(pagination.limit(), pagination.offset())
            .await
        {
            Ok(professionals) => Some(professionals.into_iter().map(|p| p.into()).collect()),
            Err(e) => {
                tracing::error!("Failed to list professionals: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryCatalogStore;
    use fake::faker::address::en::CityName;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn dto() -> CreateProfessionalDto {
        CreateProfessionalDto {
            full_name: Name().fake(),
            city: CityName().fake(),
            specialty: "Estilista".to_string(),
            contact: 3001234567,
            photo: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list_includes_professional() {
        let svc = ProfessionalService::new(Arc::new(InMemoryCatalogStore::new()));

        let created = svc.create(dto()).await.expect("create should succeed");

        let professionals = svc
            .list(&PaginationQuery::default())
            .await
            .expect("list should succeed");
        assert_eq!(professionals.len(), 1);
        assert_eq!(professionals[0].id, created.id);
        assert_eq!(professionals[0].contact, 3001234567);
        // Omitted photo is stored as absent, not as an empty string
        assert!(professionals[0].photo.is_none());
    }

    #[tokio::test]
    async fn test_create_keeps_photo_when_provided() {
        let svc = ProfessionalService::new(Arc::new(InMemoryCatalogStore::new()));

        let mut input = dto();
        input.photo = Some("data:image/png;base64,iVBORw0KGgo=".to_string());
        let created = svc.create(input).await.unwrap();

        assert_eq!(
            created.photo.as_deref(),
            Some("data:image/png;base64,iVBORw0KGgo=")
        );
    }

    #[tokio::test]
    async fn test_create_swallows_store_failure() {
        let svc = ProfessionalService::new(Arc::new(InMemoryCatalogStore::failing()));

        assert!(svc.create(dto()).await.is_none());
    }

    #[tokio::test]
    async fn test_list_resolves_to_none_on_store_failure() {
        let svc = ProfessionalService::new(Arc::new(InMemoryCatalogStore::failing()));

        // Unlike the service listing, a failed read here does not raise; the
        // caller sees no value at all.
        assert!(svc.list(&PaginationQuery::default()).await.is_none());
    }
}
