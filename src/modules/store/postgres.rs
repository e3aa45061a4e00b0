use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::professionals::models::{NewProfessional, Professional};
use crate::features::services::models::{NewService, Service, ServiceWithRelations};
use crate::modules::store::CatalogStore;

/// Postgres-backed catalog store
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn insert_category(&self, data: NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (title)
            VALUES ($1)
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(&data.title)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_categories(&self, limit: i64, offset: i64) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title, created_at, updated_at
            FROM categories
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn insert_professional(&self, data: NewProfessional) -> Result<Professional> {
        sqlx::query_as::<_, Professional>(
            r#"
            INSERT INTO professionals (full_name, city, specialty, contact, photo)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, city, specialty, contact, photo, created_at, updated_at
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.city)
        .bind(&data.specialty)
        .bind(data.contact)
        .bind(&data.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_professionals(&self, limit: i64, offset: i64) -> Result<Vec<Professional>> {
        sqlx::query_as::<_, Professional>(
            r#"
            SELECT id, full_name, city, specialty, contact, photo, created_at, updated_at
            FROM professionals
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn insert_service(&self, data: NewService) -> Result<Service> {
        // status is omitted so the column default ('pending') applies
        sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (title, client_name, description, price, category_id, professional_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, client_name, description, price, status,
                      category_id, professional_id, created_at, updated_at
            "#,
        )
        .bind(&data.title)
        .bind(&data.client_name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.category_id)
        .bind(data.professional_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_services(&self, limit: i64, offset: i64) -> Result<Vec<ServiceWithRelations>> {
        sqlx::query_as::<_, ServiceWithRelations>(
            r#"
            SELECT s.id, s.title, s.client_name, s.description, s.price, s.status,
                   s.category_id, s.professional_id, s.created_at, s.updated_at,
                   c.title AS category_title,
                   p.full_name AS professional_name
            FROM services s
            LEFT JOIN categories c ON c.id = s.category_id
            LEFT JOIN professionals p ON p.id = s.professional_id
            ORDER BY s.created_at
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
