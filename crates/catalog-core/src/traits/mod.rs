//! Capability traits implemented by storage backends.

pub mod repository;
pub mod unit_of_work;

pub use repository::CatalogRepository;
pub use unit_of_work::UnitOfWork;
