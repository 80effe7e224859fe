//! # catalog-database
//!
//! Storage backends for the catalog: PostgreSQL connection management,
//! migrations, and concrete repository implementations, plus an in-memory
//! backend implementing the same contracts with identical search
//! semantics.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod query;
pub mod repositories;
pub mod unit_of_work;

pub use connection::DatabasePool;
