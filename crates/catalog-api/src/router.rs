//! Route definitions for the catalog HTTP API.
//!
//! All routes are organized by aggregate and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(category_routes())
        .merge(genre_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Category CRUD and list endpoints
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route("/categories", post(handlers::category::create_category))
        .route("/categories/{id}", get(handlers::category::get_category))
        .route("/categories/{id}", put(handlers::category::update_category))
        .route(
            "/categories/{id}",
            delete(handlers::category::delete_category),
        )
}

/// Genre CRUD and list endpoints
fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(handlers::genre::list_genres))
        .route("/genres", post(handlers::genre::create_genre))
        .route("/genres/{id}", get(handlers::genre::get_genre))
        .route("/genres/{id}", put(handlers::genre::update_genre))
        .route("/genres/{id}", delete(handlers::genre::delete_genre))
}

/// Liveness/readiness endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
