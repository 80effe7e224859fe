//! Application wiring — builds repositories, services, and state, then
//! runs the HTTP server.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::net::TcpListener;

use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_core::traits::unit_of_work::UnitOfWork;
use catalog_database::repositories::{PgCategoryRepository, PgGenreRepository};
use catalog_database::unit_of_work::PgUnitOfWork;
use catalog_entity::category::CategoryRepository;
use catalog_entity::genre::GenreRepository;
use catalog_service::category::CategoryService;
use catalog_service::genre::GenreService;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the catalog server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PgCategoryRepository::new(db_pool.clone()));
    let genre_repo: Arc<dyn GenreRepository> = Arc::new(PgGenreRepository::new(db_pool.clone()));
    let unit_of_work: Arc<dyn UnitOfWork> = Arc::new(PgUnitOfWork::new());

    let category_service = Arc::new(CategoryService::new(
        Arc::clone(&category_repo),
        Arc::clone(&unit_of_work),
    ));
    let genre_service = Arc::new(GenreService::new(
        genre_repo,
        category_repo,
        unit_of_work,
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        category_service,
        genre_service,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Catalog server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Catalog server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
