//! Category repository contract.

use async_trait::async_trait;
use uuid::Uuid;

use catalog_core::result::AppResult;
use catalog_core::traits::repository::CatalogRepository;

use super::model::Category;

/// Storage contract for [`Category`] aggregates.
///
/// Extends the generic repository with the batch existence lookup that
/// cross-aggregate referential checks (genre → category) depend on.
#[async_trait]
pub trait CategoryRepository: CatalogRepository<Category> {
    /// Of the given ids, return those that exist in the store.
    ///
    /// The result carries no duplicates; order follows the input.
    async fn existing_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Uuid>>;
}
