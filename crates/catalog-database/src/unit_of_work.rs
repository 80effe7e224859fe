//! Unit of work for the PostgreSQL backend.

use async_trait::async_trait;

use catalog_core::result::AppResult;
use catalog_core::traits::unit_of_work::UnitOfWork;

/// PostgreSQL unit of work.
///
/// Repository operations execute directly against the pool and auto-commit
/// at the store, one statement (or repository-internal transaction) at a
/// time. `commit` therefore only marks the end of a use case's mutation
/// batch, and `rollback` cannot undo operations the store has already
/// applied.
#[derive(Debug, Clone, Default)]
pub struct PgUnitOfWork;

impl PgUnitOfWork {
    /// Create a new unit of work.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn commit(&self) -> AppResult<()> {
        Ok(())
    }

    async fn rollback(&self) -> AppResult<()> {
        Ok(())
    }
}
