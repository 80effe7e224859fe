//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use catalog_core::config::AppConfig;
use catalog_service::category::CategoryService;
use catalog_service::genre::GenreService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (readiness checks).
    pub db_pool: PgPool,
    /// Category use cases.
    pub category_service: Arc<CategoryService>,
    /// Genre use cases.
    pub genre_service: Arc<GenreService>,
}
