//! In-memory storage backend.
//!
//! Implements the same repository and unit-of-work contracts as the
//! PostgreSQL backend, with identical search semantics. Mutations are
//! staged per table and only become visible on commit.

pub mod store;

pub use store::{
    InMemoryCatalog, InMemoryCategoryRepository, InMemoryGenreRepository, InMemoryUnitOfWork,
};
