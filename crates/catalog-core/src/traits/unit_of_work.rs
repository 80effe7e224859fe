//! Unit-of-work trait: the commit boundary for pending mutations.

use async_trait::async_trait;

use crate::result::AppResult;

/// Commits or discards a batch of pending repository mutations.
///
/// Every mutating use case calls exactly one [`commit`](UnitOfWork::commit)
/// at the end of its happy path and none on failure paths. Whether
/// operations are staged until commit or auto-commit at the store is a
/// backend property; each implementation documents its behavior.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Flush all pending mutations atomically.
    async fn commit(&self) -> AppResult<()>;

    /// Discard pending mutations.
    async fn rollback(&self) -> AppResult<()>;
}
