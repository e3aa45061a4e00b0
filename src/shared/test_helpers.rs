#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};
#[cfg(test)]
use chrono::Utc;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;
#[cfg(test)]
use crate::features::categories::models::{Category, NewCategory};
#[cfg(test)]
use crate::features::professionals::models::{NewProfessional, Professional};
#[cfg(test)]
use crate::features::services::models::{
    NewService, Service, ServiceStatus, ServiceWithRelations,
};
#[cfg(test)]
use crate::modules::store::CatalogStore;

/// In-memory [`CatalogStore`] double. Generates ids and timestamps the way
/// the real store does, joins relations on read, and can be constructed in
/// a permanently failing state to exercise the error policies.
#[cfg(test)]
pub struct InMemoryCatalogStore {
    categories: Mutex<Vec<Category>>,
    professionals: Mutex<Vec<Professional>>,
    services: Mutex<Vec<Service>>,
    fail: bool,
}

#[cfg(test)]
impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            professionals: Mutex::new(Vec::new()),
            services: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A store whose every operation fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(AppError::Internal("in-memory store failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn page<T: Clone>(items: &[T], limit: i64, offset: i64) -> Vec<T> {
        items
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn insert_category(&self, data: NewCategory) -> Result<Category> {
        self.check()?;
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            title: data.title,
            created_at: now,
            updated_at: now,
        };
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn list_categories(&self, limit: i64, offset: i64) -> Result<Vec<Category>> {
        self.check()?;
        Ok(Self::page(&self.categories.lock().unwrap(), limit, offset))
    }

    async fn insert_professional(&self, data: NewProfessional) -> Result<Professional> {
        self.check()?;
        let now = Utc::now();
        let professional = Professional {
            id: Uuid::new_v4(),
            full_name: data.full_name,
            city: data.city,
            specialty: data.specialty,
            contact: data.contact,
            photo: data.photo,
            created_at: now,
            updated_at: now,
        };
        self.professionals.lock().unwrap().push(professional.clone());
        Ok(professional)
    }

    async fn list_professionals(&self, limit: i64, offset: i64) -> Result<Vec<Professional>> {
        self.check()?;
        Ok(Self::page(
            &self.professionals.lock().unwrap(),
            limit,
            offset,
        ))
    }

    async fn insert_service(&self, data: NewService) -> Result<Service> {
        self.check()?;
        let now = Utc::now();
        let service = Service {
            id: Uuid::new_v4(),
            title: data.title,
            client_name: data.client_name,
            description: data.description,
            price: data.price,
            status: ServiceStatus::default(),
            category_id: data.category_id,
            professional_id: data.professional_id,
            created_at: now,
            updated_at: now,
        };
        self.services.lock().unwrap().push(service.clone());
        Ok(service)
    }

    async fn list_services(&self, limit: i64, offset: i64) -> Result<Vec<ServiceWithRelations>> {
        self.check()?;
        let categories = self.categories.lock().unwrap();
        let professionals = self.professionals.lock().unwrap();
        let services = self.services.lock().unwrap();

        let joined: Vec<ServiceWithRelations> = services
            .iter()
            .map(|s| ServiceWithRelations {
                category_title: s.category_id.and_then(|id| {
                    categories
                        .iter()
                        .find(|c| c.id == id)
                        .map(|c| c.title.clone())
                }),
                professional_name: s.professional_id.and_then(|id| {
                    professionals
                        .iter()
                        .find(|p| p.id == id)
                        .map(|p| p.full_name.clone())
                }),
                service: s.clone(),
            })
            .collect();

        Ok(Self::page(&joined, limit, offset))
    }
}

#[cfg(test)]
pub fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-staff".to_string(),
        name: Some("Test Staff".to_string()),
        email: Some("staff@urbanglow.test".to_string()),
        picture: None,
    }
}

#[cfg(test)]
async fn inject_test_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(test_user());
    next.run(request).await
}

/// Wrap a router so every request carries the test identity, bypassing the
/// JWT middleware.
#[cfg(test)]
pub fn with_test_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_test_user_middleware))
}
