//! Category CRUD and list use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use catalog_core::result::AppResult;
use catalog_core::traits::unit_of_work::UnitOfWork;
use catalog_entity::category::{Category, CategoryRepository};

use crate::common::{ListInput, ListOutput};

/// Manages category use cases.
#[derive(Clone)]
pub struct CategoryService {
    /// Category repository.
    categories: Arc<dyn CategoryRepository>,
    /// Commit boundary for mutations.
    unit_of_work: Arc<dyn UnitOfWork>,
}

/// Request to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    /// Category name.
    pub name: String,
    /// Description; absent means empty.
    pub description: Option<String>,
    /// Active flag; absent means active.
    pub is_active: Option<bool>,
}

/// Request to update an existing category.
///
/// `name` is always required; the optional fields are patch-style —
/// absent means "keep the existing value".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryInput {
    /// Target category id.
    pub id: Uuid,
    /// New name.
    pub name: String,
    /// New description, when supplied.
    pub description: Option<String>,
    /// New active flag, when supplied.
    pub is_active: Option<bool>,
}

/// Category representation returned by every category use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOutput {
    /// Unique identifier.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Whether the category is active.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            categories,
            unit_of_work,
        }
    }

    /// Create a category.
    pub async fn create(&self, input: CreateCategoryInput) -> AppResult<CategoryOutput> {
        let category = Category::create(
            input.name,
            input.description.unwrap_or_default(),
            input.is_active.unwrap_or(true),
        )?;

        self.categories.insert(&category).await?;
        self.unit_of_work.commit().await?;

        info!(id = %category.id(), "Category created");
        Ok(CategoryOutput::from(&category))
    }

    /// Fetch a category by id.
    pub async fn get(&self, id: Uuid) -> AppResult<CategoryOutput> {
        let category = self.categories.get(id).await?;
        Ok(CategoryOutput::from(&category))
    }

    /// Update a category, applying only the supplied fields.
    pub async fn update(&self, input: UpdateCategoryInput) -> AppResult<CategoryOutput> {
        let current = self.categories.get(input.id).await?;

        let mut updated = current.update(&input.name, input.description.as_deref())?;
        if let Some(active) = input.is_active {
            updated = if active {
                updated.activate()?
            } else {
                updated.deactivate()?
            };
        }

        self.categories.update(&updated).await?;
        self.unit_of_work.commit().await?;

        info!(id = %updated.id(), "Category updated");
        Ok(CategoryOutput::from(&updated))
    }

    /// Delete a category. A missing id aborts before any mutation.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let category = self.categories.get(id).await?;

        self.categories.delete(&category).await?;
        self.unit_of_work.commit().await?;

        info!(%id, "Category deleted");
        Ok(())
    }

    /// List categories with pagination, filter, and ordering.
    pub async fn list(&self, input: ListInput) -> AppResult<ListOutput<CategoryOutput>> {
        let output = self.categories.search(&input.to_search_input()).await?;

        Ok(ListOutput {
            page: output.current_page,
            per_page: output.per_page,
            total: output.total,
            items: output.items.iter().map(CategoryOutput::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::error::ErrorKind;
    use catalog_core::types::search::SearchOrder;
    use catalog_database::memory::InMemoryCatalog;

    fn service() -> CategoryService {
        let store = InMemoryCatalog::new();
        CategoryService::new(
            Arc::new(store.category_repository()),
            Arc::new(store.unit_of_work()),
        )
    }

    fn create_input(name: &str) -> CreateCategoryInput {
        CreateCategoryInput {
            name: name.to_string(),
            description: Some(format!("{name} movies")),
            is_active: Some(true),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let service = service();
        let created = service.create(create_input("Horror")).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let service = service();
        let output = service
            .create(CreateCategoryInput {
                name: "Horror".into(),
                description: None,
                is_active: None,
            })
            .await
            .unwrap();
        assert_eq!(output.description, "");
        assert!(output.is_active);
    }

    #[tokio::test]
    async fn test_create_propagates_validation_message() {
        let service = service();
        let err = service
            .create(CreateCategoryInput {
                name: "ab".into(),
                description: None,
                is_active: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Name should be at least 3 characters long");
    }

    #[tokio::test]
    async fn test_get_missing_propagates_not_found() {
        let service = service();
        let id = Uuid::new_v4();
        let err = service.get(id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, format!("Category '{id}' not found."));
    }

    #[tokio::test]
    async fn test_update_without_description_preserves_it() {
        let service = service();
        let created = service.create(create_input("Horror")).await.unwrap();

        let updated = service
            .update(UpdateCategoryInput {
                id: created.id,
                name: "Thriller".into(),
                description: None,
                is_active: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Thriller");
        assert_eq!(updated.description, "Horror movies");
        assert!(updated.is_active);
    }

    #[tokio::test]
    async fn test_update_applies_supplied_fields() {
        let service = service();
        let created = service.create(create_input("Horror")).await.unwrap();

        let updated = service
            .update(UpdateCategoryInput {
                id: created.id,
                name: "Thriller".into(),
                description: Some("new description".into()),
                is_active: Some(false),
            })
            .await
            .unwrap();

        assert_eq!(updated.description, "new description");
        assert!(!updated.is_active);

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing_aborts() {
        let service = service();
        let err = service
            .update(UpdateCategoryInput {
                id: Uuid::new_v4(),
                name: "Thriller".into(),
                description: None,
                is_active: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_then_get_fails() {
        let service = service();
        let created = service.create(create_input("Horror")).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert!(service.get(created.id).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_missing_aborts_before_mutation() {
        let service = service();
        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_list_pages_and_metadata() {
        let service = service();
        for i in 1..=7 {
            service.create(create_input(&format!("cat {i}"))).await.unwrap();
        }

        let page2 = service
            .list(ListInput {
                page: 2,
                per_page: 5,
                ..ListInput::default()
            })
            .await
            .unwrap();
        assert_eq!(page2.items.len(), 2);
        assert_eq!(page2.total, 7);
        assert_eq!(page2.page, 2);
        assert_eq!(page2.per_page, 5);
        assert_eq!(page2.total_pages(), 2);

        let page3 = service
            .list(ListInput {
                page: 3,
                per_page: 5,
                ..ListInput::default()
            })
            .await
            .unwrap();
        assert!(page3.items.is_empty());
        assert_eq!(page3.total, 7);
    }

    #[tokio::test]
    async fn test_list_preserves_search_order() {
        let service = service();
        for name in ["Drama", "Action", "Horror"] {
            service.create(create_input(name)).await.unwrap();
        }

        let output = service
            .list(ListInput {
                dir: SearchOrder::Desc,
                ..ListInput::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = output.items.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, ["Horror", "Drama", "Action"]);
    }

    #[tokio::test]
    async fn test_list_filters_by_substring() {
        let service = service();
        for name in [
            "Action",
            "Horror",
            "Horror - Robots",
            "Horror - Based on Real Facts",
            "Drama",
        ] {
            service.create(create_input(name)).await.unwrap();
        }

        let output = service
            .list(ListInput {
                search: "Horror".into(),
                ..ListInput::default()
            })
            .await
            .unwrap();
        assert_eq!(output.total, 3);
        assert!(output.items.iter().all(|c| c.name.contains("Horror")));
    }
}
