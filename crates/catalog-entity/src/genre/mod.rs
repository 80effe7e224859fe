//! Genre aggregate and repository contract.

pub mod model;
pub mod repository;

pub use model::Genre;
pub use repository::GenreRepository;
