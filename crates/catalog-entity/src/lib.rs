//! # catalog-entity
//!
//! Domain aggregates for the catalog backend. Each aggregate owns its own
//! invariants: construction and every mutation either return a fully valid
//! instance or fail with a validation error, so an invalid state is never
//! observable. Repository contracts for each aggregate live next to the
//! model they persist.

pub mod category;
pub mod genre;

pub use category::{Category, CategoryRepository};
pub use genre::{Genre, GenreRepository};
