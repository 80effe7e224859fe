//! Generic repository trait for aggregate persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::search::{SearchInput, SearchOutput, SearchableEntity};

/// Capability interface every storage backend implements per aggregate.
///
/// The trait is generic over the aggregate type so that each entity gets a
/// strongly typed repository; entity-specific query methods live on
/// subtraits next to the entity definitions. The hardest contractual
/// obligation is [`search`](CatalogRepository::search): every backend must
/// honor the filter/order/tie-break/pagination semantics of
/// [`crate::types::search`] identically.
#[async_trait]
pub trait CatalogRepository<T>: Send + Sync
where
    T: SearchableEntity + Send + Sync + 'static,
{
    /// Persist a new aggregate. Store-level failures propagate unchanged.
    async fn insert(&self, entity: &T) -> AppResult<()>;

    /// Fetch an aggregate by id.
    ///
    /// Fails with a not-found error whose message is
    /// `"{KIND} '{id}' not found."` when no record exists.
    async fn get(&self, id: Uuid) -> AppResult<T>;

    /// Persist changes to an already-fetched aggregate.
    async fn update(&self, entity: &T) -> AppResult<()>;

    /// Remove an already-fetched aggregate.
    async fn delete(&self, entity: &T) -> AppResult<()>;

    /// Run a paginated, filtered, ordered search.
    async fn search(&self, input: &SearchInput) -> AppResult<SearchOutput<T>>;
}
