//! Genre aggregate model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_core::result::AppResult;
use catalog_core::types::search::SearchableEntity;
use catalog_core::validation;

/// A catalog genre with its associated category ids.
///
/// The category list is an ordered, append-only association: entries are
/// added and removed only through the explicit mutators below, and
/// duplicates are permitted. As with [`Category`](crate::Category),
/// mutators return a new validated instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    id: Uuid,
    name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    categories: Vec<Uuid>,
}

impl Genre {
    /// Create a new genre with a fresh id, the current timestamp, and an
    /// empty category list.
    pub fn create(name: impl Into<String>, is_active: bool) -> AppResult<Self> {
        let genre = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_active,
            created_at: Utc::now(),
            categories: Vec::new(),
        };
        genre.validate()?;
        Ok(genre)
    }

    /// Rebuild a genre from stored fields, without validation.
    ///
    /// For repository materialization only.
    pub fn restore(
        id: Uuid,
        name: String,
        is_active: bool,
        created_at: DateTime<Utc>,
        categories: Vec<Uuid>,
    ) -> Self {
        Self {
            id,
            name,
            is_active,
            created_at,
            categories,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Genre name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the genre is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Creation timestamp, set once at construction.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Associated category ids, in append order.
    pub fn categories(&self) -> &[Uuid] {
        &self.categories
    }

    /// Replace the name.
    pub fn update(&self, name: &str) -> AppResult<Self> {
        let updated = Self {
            name: name.to_string(),
            ..self.clone()
        };
        updated.validate()?;
        Ok(updated)
    }

    /// Append a category id. Duplicates are permitted.
    pub fn add_category(&self, category_id: Uuid) -> AppResult<Self> {
        let mut updated = self.clone();
        updated.categories.push(category_id);
        updated.validate()?;
        Ok(updated)
    }

    /// Remove every entry equal to `category_id`.
    pub fn remove_category(&self, category_id: Uuid) -> Self {
        let mut updated = self.clone();
        updated.categories.retain(|id| *id != category_id);
        updated
    }

    /// Clear the category list.
    pub fn remove_all_categories(&self) -> Self {
        let mut updated = self.clone();
        updated.categories.clear();
        updated
    }

    /// Mark the genre active.
    pub fn activate(&self) -> AppResult<Self> {
        let updated = Self {
            is_active: true,
            ..self.clone()
        };
        updated.validate()?;
        Ok(updated)
    }

    /// Mark the genre inactive.
    pub fn deactivate(&self) -> AppResult<Self> {
        let updated = Self {
            is_active: false,
            ..self.clone()
        };
        updated.validate()?;
        Ok(updated)
    }

    fn validate(&self) -> AppResult<()> {
        validation::not_null_or_empty(&self.name, "Name")?;
        Ok(())
    }
}

impl SearchableEntity for Genre {
    const KIND: &'static str = "Genre";

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_starts_with_no_categories() {
        let genre = Genre::create("Horror", true).unwrap();
        assert_eq!(genre.name(), "Horror");
        assert!(genre.is_active());
        assert!(genre.categories().is_empty());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let err = Genre::create("", true).unwrap_err();
        assert_eq!(err.message, "Name should not be null or empty");

        let err = Genre::create("  ", true).unwrap_err();
        assert_eq!(err.message, "Name should not be null or empty");
    }

    #[test]
    fn test_update_replaces_name() {
        let genre = Genre::create("Horror", true).unwrap();
        let updated = genre.update("Thriller").unwrap();
        assert_eq!(updated.name(), "Thriller");
        assert_eq!(updated.id(), genre.id());
    }

    #[test]
    fn test_update_rejects_empty_name() {
        let genre = Genre::create("Horror", true).unwrap();
        assert!(genre.update("").is_err());
        assert_eq!(genre.name(), "Horror");
    }

    #[test]
    fn test_add_category_appends_in_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let genre = Genre::create("Horror", true)
            .unwrap()
            .add_category(first)
            .unwrap()
            .add_category(second)
            .unwrap();
        assert_eq!(genre.categories(), [first, second]);
    }

    #[test]
    fn test_add_category_permits_duplicates() {
        let id = Uuid::new_v4();
        let genre = Genre::create("Horror", true)
            .unwrap()
            .add_category(id)
            .unwrap()
            .add_category(id)
            .unwrap();
        assert_eq!(genre.categories(), [id, id]);
    }

    #[test]
    fn test_add_then_remove_leaves_empty_list() {
        let id = Uuid::new_v4();
        let genre = Genre::create("Horror", true)
            .unwrap()
            .add_category(id)
            .unwrap()
            .remove_category(id);
        assert!(genre.categories().is_empty());
    }

    #[test]
    fn test_remove_category_removes_every_occurrence() {
        let keep = Uuid::new_v4();
        let drop = Uuid::new_v4();
        let genre = Genre::create("Horror", true)
            .unwrap()
            .add_category(drop)
            .unwrap()
            .add_category(keep)
            .unwrap()
            .add_category(drop)
            .unwrap()
            .remove_category(drop);
        assert_eq!(genre.categories(), [keep]);
    }

    #[test]
    fn test_remove_all_categories() {
        let genre = Genre::create("Horror", true)
            .unwrap()
            .add_category(Uuid::new_v4())
            .unwrap()
            .add_category(Uuid::new_v4())
            .unwrap()
            .remove_all_categories();
        assert!(genre.categories().is_empty());
    }

    #[test]
    fn test_activate_and_deactivate() {
        let genre = Genre::create("Horror", false).unwrap();
        assert!(genre.activate().unwrap().is_active());
        assert!(!genre.activate().unwrap().deactivate().unwrap().is_active());
    }
}
