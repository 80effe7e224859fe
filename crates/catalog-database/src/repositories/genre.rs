//! Genre repository implementation (PostgreSQL).
//!
//! A genre row lives in `genres`; its category associations live in
//! `genre_categories` keyed by `(genre_id, position)` so that append order
//! and duplicate entries survive a round-trip.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::traits::repository::CatalogRepository;
use catalog_core::types::search::{SearchInput, SearchOutput, SearchableEntity};
use catalog_entity::genre::{Genre, GenreRepository};

use crate::query::{like_pattern, order_clause};

/// PostgreSQL-backed repository for [`Genre`] aggregates.
#[derive(Debug, Clone)]
pub struct PgGenreRepository {
    pool: PgPool,
}

/// Raw `genres` row before its category ids are attached.
#[derive(Debug, sqlx::FromRow)]
struct GenreRow {
    id: Uuid,
    name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl GenreRow {
    fn into_genre(self, categories: Vec<Uuid>) -> Genre {
        Genre::restore(self.id, self.name, self.is_active, self.created_at, categories)
    }
}

impl PgGenreRepository {
    /// Create a new genre repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch category ids for one genre, in append order.
    async fn category_ids(&self, genre_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT category_id FROM genre_categories WHERE genre_id = $1 ORDER BY position",
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch genre categories", e)
        })
    }

    /// Fetch category ids for a page of genres in one query.
    async fn category_ids_for(&self, genre_ids: &[Uuid]) -> AppResult<HashMap<Uuid, Vec<Uuid>>> {
        let rows: Vec<(Uuid, Uuid)> = sqlx::query_as(
            "SELECT genre_id, category_id FROM genre_categories \
             WHERE genre_id = ANY($1) ORDER BY genre_id, position",
        )
        .bind(genre_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch genre categories", e)
        })?;

        let mut by_genre: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (genre_id, category_id) in rows {
            by_genre.entry(genre_id).or_default().push(category_id);
        }
        Ok(by_genre)
    }
}

#[async_trait]
impl CatalogRepository<Genre> for PgGenreRepository {
    async fn insert(&self, entity: &Genre) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("INSERT INTO genres (id, name, is_active, created_at) VALUES ($1, $2, $3, $4)")
            .bind(entity.id())
            .bind(entity.name())
            .bind(entity.is_active())
            .bind(entity.created_at())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert genre", e)
            })?;

        for (position, category_id) in entity.categories().iter().enumerate() {
            sqlx::query(
                "INSERT INTO genre_categories (genre_id, position, category_id) \
                 VALUES ($1, $2, $3)",
            )
            .bind(entity.id())
            .bind(position as i32)
            .bind(category_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert genre category", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit genre insert", e)
        })
    }

    async fn get(&self, id: Uuid) -> AppResult<Genre> {
        let row = sqlx::query_as::<_, GenreRow>(
            "SELECT id, name, is_active, created_at FROM genres WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch genre", e))?
        .ok_or_else(|| AppError::not_found(format!("{} '{id}' not found.", Genre::KIND)))?;

        let categories = self.category_ids(id).await?;
        Ok(row.into_genre(categories))
    }

    async fn update(&self, entity: &Genre) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let result =
            sqlx::query("UPDATE genres SET name = $2, is_active = $3 WHERE id = $1")
                .bind(entity.id())
                .bind(entity.name())
                .bind(entity.is_active())
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update genre", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "{} '{}' not found.",
                Genre::KIND,
                entity.id()
            )));
        }

        sqlx::query("DELETE FROM genre_categories WHERE genre_id = $1")
            .bind(entity.id())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear genre categories", e)
            })?;

        for (position, category_id) in entity.categories().iter().enumerate() {
            sqlx::query(
                "INSERT INTO genre_categories (genre_id, position, category_id) \
                 VALUES ($1, $2, $3)",
            )
            .bind(entity.id())
            .bind(position as i32)
            .bind(category_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert genre category", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit genre update", e)
        })
    }

    async fn delete(&self, entity: &Genre) -> AppResult<()> {
        // genre_categories rows go with the genre via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(entity.id())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete genre", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "{} '{}' not found.",
                Genre::KIND,
                entity.id()
            )));
        }
        Ok(())
    }

    async fn search(&self, input: &SearchInput) -> AppResult<SearchOutput<Genre>> {
        let order = order_clause(input.order_by, input.order);

        let (total, rows): (i64, Vec<GenreRow>) = if input.search.is_empty() {
            let total = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count genres", e)
                })?;

            let rows = sqlx::query_as::<_, GenreRow>(&format!(
                "SELECT id, name, is_active, created_at FROM genres \
                 ORDER BY {order} LIMIT $1 OFFSET $2"
            ))
            .bind(input.limit() as i64)
            .bind(input.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list genres", e)
            })?;

            (total, rows)
        } else {
            let pattern = like_pattern(&input.search);

            let total = sqlx::query_scalar("SELECT COUNT(*) FROM genres WHERE name ILIKE $1")
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count genres", e)
                })?;

            let rows = sqlx::query_as::<_, GenreRow>(&format!(
                "SELECT id, name, is_active, created_at FROM genres WHERE name ILIKE $1 \
                 ORDER BY {order} LIMIT $2 OFFSET $3"
            ))
            .bind(&pattern)
            .bind(input.limit() as i64)
            .bind(input.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search genres", e)
            })?;

            (total, rows)
        };

        let genre_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut by_genre = if genre_ids.is_empty() {
            HashMap::new()
        } else {
            self.category_ids_for(&genre_ids).await?
        };

        let items = rows
            .into_iter()
            .map(|row| {
                let categories = by_genre.remove(&row.id).unwrap_or_default();
                row.into_genre(categories)
            })
            .collect();

        Ok(SearchOutput::new(
            input.page,
            input.per_page,
            total as u64,
            items,
        ))
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {}
