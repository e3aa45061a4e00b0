use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::models::NewCategory;
use crate::modules::store::CatalogStore;
use crate::shared::types::PaginationQuery;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn CatalogStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a new category.
    ///
    /// Persistence failures are logged and swallowed; callers can only tell
    /// success from failure by the missing value. Do not unify this with the
    /// propagating operations below without checking every call site.
    pub async fn create(&self, dto: CreateCategoryDto) -> Option<CategoryResponseDto> {
        let data = NewCategory { title: dto.title };

        match self.store.insert_category(data).await {
            Ok(category) => {
                tracing::info!(
                    "Category created: id={}, title={}",
                    category.id,
                    category.title
                );
                Some(category.into())
            }
            Err(e) => {
                tracing::error!("Failed to create category: {}", e);
                None
            }
        }
    }

    /// List categories (paged). Failures propagate to the caller.
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<Vec<CategoryResponseDto>> {
        let categories = self
            .store
            .list_categories(pagination.limit(), pagination.offset())
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {}", e);
                e
            })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }
}
