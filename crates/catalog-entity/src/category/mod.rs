//! Category aggregate and repository contract.

pub mod model;
pub mod repository;

pub use model::Category;
pub use repository::CategoryRepository;
