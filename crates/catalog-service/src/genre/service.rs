//! Genre CRUD and list use cases, including the cross-aggregate
//! referential check against the category store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::unit_of_work::UnitOfWork;
use catalog_entity::category::CategoryRepository;
use catalog_entity::genre::{Genre, GenreRepository};

use crate::common::{ListInput, ListOutput};

/// Manages genre use cases.
#[derive(Clone)]
pub struct GenreService {
    /// Genre repository.
    genres: Arc<dyn GenreRepository>,
    /// Category repository, for the batch existence lookup.
    categories: Arc<dyn CategoryRepository>,
    /// Commit boundary for mutations.
    unit_of_work: Arc<dyn UnitOfWork>,
}

/// Request to create a new genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenreInput {
    /// Genre name.
    pub name: String,
    /// Active flag; absent means active.
    pub is_active: Option<bool>,
    /// Category ids to associate, in order.
    pub categories_ids: Vec<Uuid>,
}

/// Request to update an existing genre.
///
/// `name` is always required. `categories_ids` is patch-style: absent
/// keeps the current associations, present replaces them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGenreInput {
    /// Target genre id.
    pub id: Uuid,
    /// New name.
    pub name: String,
    /// New active flag, when supplied.
    pub is_active: Option<bool>,
    /// Replacement category ids, when supplied.
    pub categories_ids: Option<Vec<Uuid>>,
}

/// Genre representation returned by every genre use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreOutput {
    /// Unique identifier.
    pub id: Uuid,
    /// Genre name.
    pub name: String,
    /// Whether the genre is active.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Associated category ids, in order.
    pub categories: Vec<Uuid>,
}

impl From<&Genre> for GenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
            created_at: genre.created_at(),
            categories: genre.categories().to_vec(),
        }
    }
}

impl GenreService {
    /// Creates a new genre service.
    pub fn new(
        genres: Arc<dyn GenreRepository>,
        categories: Arc<dyn CategoryRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            genres,
            categories,
            unit_of_work,
        }
    }

    /// Create a genre, validating every referenced category id.
    pub async fn create(&self, input: CreateGenreInput) -> AppResult<GenreOutput> {
        let mut genre = Genre::create(input.name, input.is_active.unwrap_or(true))?;

        if !input.categories_ids.is_empty() {
            self.assert_categories_exist(&input.categories_ids).await?;
            for category_id in &input.categories_ids {
                genre = genre.add_category(*category_id)?;
            }
        }

        self.genres.insert(&genre).await?;
        self.unit_of_work.commit().await?;

        info!(id = %genre.id(), "Genre created");
        Ok(GenreOutput::from(&genre))
    }

    /// Fetch a genre by id.
    pub async fn get(&self, id: Uuid) -> AppResult<GenreOutput> {
        let genre = self.genres.get(id).await?;
        Ok(GenreOutput::from(&genre))
    }

    /// Update a genre, applying only the supplied fields.
    pub async fn update(&self, input: UpdateGenreInput) -> AppResult<GenreOutput> {
        let current = self.genres.get(input.id).await?;

        let mut updated = current.update(&input.name)?;
        if let Some(active) = input.is_active {
            updated = if active {
                updated.activate()?
            } else {
                updated.deactivate()?
            };
        }
        if let Some(categories_ids) = &input.categories_ids {
            self.assert_categories_exist(categories_ids).await?;
            updated = updated.remove_all_categories();
            for category_id in categories_ids {
                updated = updated.add_category(*category_id)?;
            }
        }

        self.genres.update(&updated).await?;
        self.unit_of_work.commit().await?;

        info!(id = %updated.id(), "Genre updated");
        Ok(GenreOutput::from(&updated))
    }

    /// Delete a genre. A missing id aborts before any mutation.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let genre = self.genres.get(id).await?;

        self.genres.delete(&genre).await?;
        self.unit_of_work.commit().await?;

        info!(%id, "Genre deleted");
        Ok(())
    }

    /// List genres with pagination, filter, and ordering.
    pub async fn list(&self, input: ListInput) -> AppResult<ListOutput<GenreOutput>> {
        let output = self.genres.search(&input.to_search_input()).await?;

        Ok(ListOutput {
            page: output.current_page,
            per_page: output.per_page,
            total: output.total,
            items: output.items.iter().map(GenreOutput::from).collect(),
        })
    }

    /// Fail with one related-aggregate error naming every id that does not
    /// exist in the category store.
    async fn assert_categories_exist(&self, ids: &[Uuid]) -> AppResult<()> {
        let existing = self.categories.existing_ids(ids).await?;

        let mut missing: Vec<Uuid> = Vec::new();
        for id in ids {
            if !existing.contains(id) && !missing.contains(id) {
                missing.push(*id);
            }
        }

        if missing.is_empty() {
            return Ok(());
        }

        let joined = missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(AppError::related_aggregate(format!(
            "Related category id (or ids) not found: {joined}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::error::ErrorKind;
    use catalog_core::traits::repository::CatalogRepository;
    use catalog_database::memory::InMemoryCatalog;
    use catalog_entity::category::Category;

    struct Fixture {
        service: GenreService,
        store: Arc<InMemoryCatalog>,
    }

    fn fixture() -> Fixture {
        let store = InMemoryCatalog::new();
        let service = GenreService::new(
            Arc::new(store.genre_repository()),
            Arc::new(store.category_repository()),
            Arc::new(store.unit_of_work()),
        );
        Fixture { service, store }
    }

    impl Fixture {
        /// Insert and commit a category directly through the store.
        async fn seed_category(&self, name: &str) -> Uuid {
            let category = Category::create(name, "", true).unwrap();
            self.store
                .category_repository()
                .insert(&category)
                .await
                .unwrap();
            self.store.unit_of_work().commit().await.unwrap();
            category.id()
        }
    }

    fn create_input(name: &str, categories_ids: Vec<Uuid>) -> CreateGenreInput {
        CreateGenreInput {
            name: name.to_string(),
            is_active: None,
            categories_ids,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let fx = fixture();
        let created = fx
            .service
            .create(create_input("Horror", Vec::new()))
            .await
            .unwrap();
        assert!(created.is_active);
        assert!(created.categories.is_empty());

        let fetched = fx.service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_with_existing_categories() {
        let fx = fixture();
        let first = fx.seed_category("Action").await;
        let second = fx.seed_category("Drama").await;

        let created = fx
            .service
            .create(create_input("Horror", vec![first, second]))
            .await
            .unwrap();
        assert_eq!(created.categories, [first, second]);
    }

    #[tokio::test]
    async fn test_create_with_missing_category_fails_with_its_id() {
        let fx = fixture();
        let known = fx.seed_category("Action").await;
        let missing = Uuid::new_v4();

        let err = fx
            .service
            .create(create_input("Horror", vec![known, missing]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::RelatedAggregate);
        assert_eq!(
            err.message,
            format!("Related category id (or ids) not found: {missing}")
        );

        // Nothing was committed.
        assert!(
            fx.service
                .list(ListInput::default())
                .await
                .unwrap()
                .items
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_create_lists_every_missing_id_once() {
        let fx = fixture();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let err = fx
            .service
            .create(create_input("Horror", vec![first, second, first]))
            .await
            .unwrap_err();
        assert_eq!(
            err.message,
            format!("Related category id (or ids) not found: {first}, {second}")
        );
    }

    #[tokio::test]
    async fn test_create_propagates_validation_message() {
        let fx = fixture();
        let err = fx
            .service
            .create(create_input("", Vec::new()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Name should not be null or empty");
    }

    #[tokio::test]
    async fn test_update_preserves_categories_when_absent() {
        let fx = fixture();
        let category_id = fx.seed_category("Action").await;
        let created = fx
            .service
            .create(create_input("Horror", vec![category_id]))
            .await
            .unwrap();

        let updated = fx
            .service
            .update(UpdateGenreInput {
                id: created.id,
                name: "Thriller".into(),
                is_active: Some(false),
                categories_ids: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Thriller");
        assert!(!updated.is_active);
        assert_eq!(updated.categories, [category_id]);
    }

    #[tokio::test]
    async fn test_update_replaces_categories_when_supplied() {
        let fx = fixture();
        let old = fx.seed_category("Action").await;
        let new = fx.seed_category("Drama").await;
        let created = fx
            .service
            .create(create_input("Horror", vec![old]))
            .await
            .unwrap();

        let updated = fx
            .service
            .update(UpdateGenreInput {
                id: created.id,
                name: "Horror".into(),
                is_active: None,
                categories_ids: Some(vec![new]),
            })
            .await
            .unwrap();
        assert_eq!(updated.categories, [new]);
    }

    #[tokio::test]
    async fn test_update_rejects_missing_replacement_category() {
        let fx = fixture();
        let created = fx
            .service
            .create(create_input("Horror", Vec::new()))
            .await
            .unwrap();

        let missing = Uuid::new_v4();
        let err = fx
            .service
            .update(UpdateGenreInput {
                id: created.id,
                name: "Horror".into(),
                is_active: None,
                categories_ids: Some(vec![missing]),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::RelatedAggregate);
    }

    #[tokio::test]
    async fn test_delete_missing_propagates_not_found() {
        let fx = fixture();
        let id = Uuid::new_v4();
        let err = fx.service.delete(id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, format!("Genre '{id}' not found."));
    }

    #[tokio::test]
    async fn test_list_pages_genres() {
        let fx = fixture();
        for i in 1..=7 {
            fx.service
                .create(create_input(&format!("genre {i}"), Vec::new()))
                .await
                .unwrap();
        }

        let page2 = fx
            .service
            .list(ListInput {
                page: 2,
                per_page: 5,
                ..ListInput::default()
            })
            .await
            .unwrap();
        assert_eq!(page2.items.len(), 2);
        assert_eq!(page2.total, 7);
    }
}
