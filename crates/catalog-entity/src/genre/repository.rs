//! Genre repository contract.

use async_trait::async_trait;

use catalog_core::traits::repository::CatalogRepository;

use super::model::Genre;

/// Storage contract for [`Genre`] aggregates.
#[async_trait]
pub trait GenreRepository: CatalogRepository<Genre> {}
