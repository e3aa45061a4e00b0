//! Persistence contract for the service catalog.
//!
//! The [`CatalogStore`] trait is the interface the feature services are
//! written against; it is injected as a constructed dependency rather than
//! instantiated per module, so tests can substitute an in-memory double.
//! The production implementation is [`PgCatalogStore`].

mod postgres;

pub use postgres::PgCatalogStore;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::{Category, NewCategory};
use crate::features::professionals::models::{NewProfessional, Professional};
use crate::features::services::models::{NewService, Service, ServiceWithRelations};

/// Typed create/read operations over the three catalog tables.
///
/// Row ids and timestamps are always generated by the implementation, never
/// by callers. List reads are paged with LIMIT/OFFSET; callers that want
/// "everything" pass a large limit.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn insert_category(&self, data: NewCategory) -> Result<Category>;

    async fn list_categories(&self, limit: i64, offset: i64) -> Result<Vec<Category>>;

    async fn insert_professional(&self, data: NewProfessional) -> Result<Professional>;

    async fn list_professionals(&self, limit: i64, offset: i64) -> Result<Vec<Professional>>;

    async fn insert_service(&self, data: NewService) -> Result<Service>;

    /// List services joined with the related category title and
    /// professional name through the nullable foreign keys.
    async fn list_services(&self, limit: i64, offset: i64) -> Result<Vec<ServiceWithRelations>>;
}
