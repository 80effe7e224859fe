//! # catalog-api
//!
//! HTTP API layer for the catalog backend built on Axum.
//!
//! Provides the REST endpoints for categories and genres, middleware
//! (trace, CORS, compression, request logging), extractors, DTOs, and the
//! error → HTTP status mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
