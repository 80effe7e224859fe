//! In-memory catalog store with staged unit-of-work semantics.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::repository::CatalogRepository;
use catalog_core::traits::unit_of_work::UnitOfWork;
use catalog_core::types::search::{self, SearchInput, SearchOutput, SearchableEntity};
use catalog_entity::category::{Category, CategoryRepository};
use catalog_entity::genre::{Genre, GenreRepository};

/// A staged mutation awaiting commit.
#[derive(Debug, Clone)]
enum Op<T> {
    Upsert(T),
    Delete(Uuid),
}

/// One aggregate table: committed rows plus staged mutations.
///
/// Rows are keyed in a `BTreeMap` so iteration order is deterministic,
/// which keeps fully-tied search results stable across repeated calls.
#[derive(Debug)]
struct Table<T> {
    rows: RwLock<BTreeMap<Uuid, T>>,
    pending: Mutex<Vec<Op<T>>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            pending: Mutex::new(Vec::new()),
        }
    }
}

impl<T: SearchableEntity + Clone> Table<T> {
    async fn stage(&self, op: Op<T>) {
        self.pending.lock().await.push(op);
    }

    /// Fail with the contract's not-found message unless a committed row
    /// with this id exists.
    async fn ensure_exists(&self, id: Uuid) -> AppResult<()> {
        if self.rows.read().await.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "{} '{id}' not found.",
                T::KIND
            )))
        }
    }

    async fn get(&self, id: Uuid) -> AppResult<T> {
        self.rows.read().await.get(&id).cloned().ok_or_else(|| {
            AppError::not_found(format!("{} '{id}' not found.", T::KIND))
        })
    }

    async fn search(&self, input: &SearchInput) -> SearchOutput<T> {
        let rows = self.rows.read().await;
        search::execute(rows.values().cloned(), input)
    }

    async fn commit(&self) {
        let mut rows = self.rows.write().await;
        for op in self.pending.lock().await.drain(..) {
            match op {
                Op::Upsert(entity) => {
                    rows.insert(entity.id(), entity);
                }
                Op::Delete(id) => {
                    rows.remove(&id);
                }
            }
        }
    }

    async fn rollback(&self) {
        self.pending.lock().await.clear();
    }
}

/// Shared in-memory store.
///
/// Repositories and the unit of work hold `Arc`s onto the same instance;
/// committing the unit of work flushes the staged mutations of every
/// table.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    categories: Table<Category>,
    genres: Table<Genre>,
}

impl InMemoryCatalog {
    /// Create a new, empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Category repository view over this store.
    pub fn category_repository(self: &Arc<Self>) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            store: Arc::clone(self),
        }
    }

    /// Genre repository view over this store.
    pub fn genre_repository(self: &Arc<Self>) -> InMemoryGenreRepository {
        InMemoryGenreRepository {
            store: Arc::clone(self),
        }
    }

    /// Unit of work over this store.
    pub fn unit_of_work(self: &Arc<Self>) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            store: Arc::clone(self),
        }
    }
}

/// In-memory repository for [`Category`] aggregates.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    store: Arc<InMemoryCatalog>,
}

#[async_trait]
impl CatalogRepository<Category> for InMemoryCategoryRepository {
    async fn insert(&self, entity: &Category) -> AppResult<()> {
        self.store
            .categories
            .stage(Op::Upsert(entity.clone()))
            .await;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Category> {
        self.store.categories.get(id).await
    }

    async fn update(&self, entity: &Category) -> AppResult<()> {
        self.store.categories.ensure_exists(entity.id()).await?;
        self.store
            .categories
            .stage(Op::Upsert(entity.clone()))
            .await;
        Ok(())
    }

    async fn delete(&self, entity: &Category) -> AppResult<()> {
        self.store.categories.ensure_exists(entity.id()).await?;
        self.store.categories.stage(Op::Delete(entity.id())).await;
        Ok(())
    }

    async fn search(&self, input: &SearchInput) -> AppResult<SearchOutput<Category>> {
        Ok(self.store.categories.search(input).await)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn existing_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Uuid>> {
        let rows = self.store.categories.rows.read().await;
        let mut found = Vec::new();
        for id in ids {
            if rows.contains_key(id) && !found.contains(id) {
                found.push(*id);
            }
        }
        Ok(found)
    }
}

/// In-memory repository for [`Genre`] aggregates.
#[derive(Debug, Clone)]
pub struct InMemoryGenreRepository {
    store: Arc<InMemoryCatalog>,
}

#[async_trait]
impl CatalogRepository<Genre> for InMemoryGenreRepository {
    async fn insert(&self, entity: &Genre) -> AppResult<()> {
        self.store.genres.stage(Op::Upsert(entity.clone())).await;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Genre> {
        self.store.genres.get(id).await
    }

    async fn update(&self, entity: &Genre) -> AppResult<()> {
        self.store.genres.ensure_exists(entity.id()).await?;
        self.store.genres.stage(Op::Upsert(entity.clone())).await;
        Ok(())
    }

    async fn delete(&self, entity: &Genre) -> AppResult<()> {
        self.store.genres.ensure_exists(entity.id()).await?;
        self.store.genres.stage(Op::Delete(entity.id())).await;
        Ok(())
    }

    async fn search(&self, input: &SearchInput) -> AppResult<SearchOutput<Genre>> {
        Ok(self.store.genres.search(input).await)
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {}

/// Unit of work for the in-memory backend.
///
/// Commit atomically applies the staged mutations of every table;
/// rollback discards them without touching committed rows.
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork {
    store: Arc<InMemoryCatalog>,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(&self) -> AppResult<()> {
        self.store.categories.commit().await;
        self.store.genres.commit().await;
        Ok(())
    }

    async fn rollback(&self) -> AppResult<()> {
        self.store.categories.rollback().await;
        self.store.genres.rollback().await;
        Ok(())
    }
}
