//! PostgreSQL repository implementations.

pub mod category;
pub mod genre;

pub use category::PgCategoryRepository;
pub use genre::PgGenreRepository;
