//! Category repository implementation (PostgreSQL).

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::traits::repository::CatalogRepository;
use catalog_core::types::search::{SearchInput, SearchOutput, SearchableEntity};
use catalog_entity::category::{Category, CategoryRepository};

use crate::query::{like_pattern, order_clause};

const COLUMNS: &str = "id, name, description, is_active, created_at";

/// PostgreSQL-backed repository for [`Category`] aggregates.
#[derive(Debug, Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository<Category> for PgCategoryRepository {
    async fn insert(&self, entity: &Category) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO categories (id, name, description, is_active, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(entity.id())
        .bind(entity.name())
        .bind(entity.description())
        .bind(entity.is_active())
        .bind(entity.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert category", e))?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch category", e))?
        .ok_or_else(|| AppError::not_found(format!("{} '{id}' not found.", Category::KIND)))
    }

    async fn update(&self, entity: &Category) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE categories SET name = $2, description = $3, is_active = $4 WHERE id = $1",
        )
        .bind(entity.id())
        .bind(entity.name())
        .bind(entity.description())
        .bind(entity.is_active())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update category", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "{} '{}' not found.",
                Category::KIND,
                entity.id()
            )));
        }
        Ok(())
    }

    async fn delete(&self, entity: &Category) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "{} '{}' not found.",
                Category::KIND,
                entity.id()
            )));
        }
        Ok(())
    }

    async fn search(&self, input: &SearchInput) -> AppResult<SearchOutput<Category>> {
        let order = order_clause(input.order_by, input.order);

        let (total, items): (i64, Vec<Category>) = if input.search.is_empty() {
            let total = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
                })?;

            let items = sqlx::query_as::<_, Category>(&format!(
                "SELECT {COLUMNS} FROM categories ORDER BY {order} LIMIT $1 OFFSET $2"
            ))
            .bind(input.limit() as i64)
            .bind(input.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list categories", e)
            })?;

            (total, items)
        } else {
            let pattern = like_pattern(&input.search);

            let total = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE name ILIKE $1")
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
                })?;

            let items = sqlx::query_as::<_, Category>(&format!(
                "SELECT {COLUMNS} FROM categories WHERE name ILIKE $1 \
                 ORDER BY {order} LIMIT $2 OFFSET $3"
            ))
            .bind(&pattern)
            .bind(input.limit() as i64)
            .bind(input.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search categories", e)
            })?;

            (total, items)
        };

        Ok(SearchOutput::new(
            input.page,
            input.per_page,
            total as u64,
            items,
        ))
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn existing_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Uuid>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM categories WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to look up category ids", e)
            })
    }
}
