//! Category aggregate model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use catalog_core::result::AppResult;
use catalog_core::types::search::SearchableEntity;
use catalog_core::validation;

/// Minimum category name length.
const NAME_MIN_LENGTH: usize = 3;
/// Maximum category name length.
const NAME_MAX_LENGTH: usize = 255;
/// Maximum category description length.
const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// A catalog category.
///
/// Fields are private; every constructor and mutator validates before the
/// instance becomes observable. Mutators return a new validated instance
/// rather than modifying in place, so a failed mutation leaves the
/// original untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    id: Uuid,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category with a fresh id and the current timestamp.
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> AppResult<Self> {
        let category = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            is_active,
            created_at: Utc::now(),
        };
        category.validate()?;
        Ok(category)
    }

    /// Rebuild a category from stored fields, without validation.
    ///
    /// For repository materialization only: rows were validated when they
    /// were written.
    pub fn restore(
        id: Uuid,
        name: String,
        description: String,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_at,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category description. Never null; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the category is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Creation timestamp, set once at construction.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the name, and the description when one is supplied.
    ///
    /// `None` for `description` preserves the current value (partial
    /// update semantics).
    pub fn update(&self, name: &str, description: Option<&str>) -> AppResult<Self> {
        let updated = Self {
            name: name.to_string(),
            description: description
                .map(str::to_string)
                .unwrap_or_else(|| self.description.clone()),
            ..self.clone()
        };
        updated.validate()?;
        Ok(updated)
    }

    /// Mark the category active.
    pub fn activate(&self) -> AppResult<Self> {
        let updated = Self {
            is_active: true,
            ..self.clone()
        };
        updated.validate()?;
        Ok(updated)
    }

    /// Mark the category inactive.
    pub fn deactivate(&self) -> AppResult<Self> {
        let updated = Self {
            is_active: false,
            ..self.clone()
        };
        updated.validate()?;
        Ok(updated)
    }

    /// Fail-fast invariant check; the first failing rule's message surfaces.
    fn validate(&self) -> AppResult<()> {
        validation::not_null_or_empty(&self.name, "Name")?;
        validation::min_length(&self.name, NAME_MIN_LENGTH, "Name")?;
        validation::max_length(&self.name, NAME_MAX_LENGTH, "Name")?;
        validation::max_length(&self.description, DESCRIPTION_MAX_LENGTH, "Description")?;
        Ok(())
    }
}

impl SearchableEntity for Category {
    const KIND: &'static str = "Category";

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
    fn test_create_sets_all_fields() {
        let category = Category::create("Horror", "Scary movies", true).unwrap();
        assert_eq!(category.name(), "Horror");
        assert_eq!(category.description(), "Scary movies");
        assert!(category.is_active());
        assert!(!category.id().is_nil());
    }

    #[test]
    fn test_create_accepts_boundary_lengths() {
        assert!(Category::create("abc", "", true).is_ok());
        assert!(Category::create("a".repeat(255), "", true).is_ok());
        assert!(Category::create("abc", "d".repeat(10_000), true).is_ok());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let err = Category::create("", "desc", true).unwrap_err();
        assert_eq!(err.message, "Name should not be null or empty");

        let err = Category::create("   ", "desc", true).unwrap_err();
        assert_eq!(err.message, "Name should not be null or empty");
    }

    #[test]
    fn test_create_rejects_short_name() {
        let err = Category::create("ab", "desc", true).unwrap_err();
        assert_eq!(err.message, "Name should be at least 3 characters long");
    }

    #[test]
    fn test_create_rejects_long_name() {
        let err = Category::create("a".repeat(256), "desc", true).unwrap_err();
        assert_eq!(
            err.message,
            "Name should not be greater than 255 characters long"
        );
    }

    #[test]
    fn test_create_rejects_long_description() {
        let err = Category::create("abc", "d".repeat(10_001), true).unwrap_err();
        assert_eq!(
            err.message,
            "Description should not be greater than 10000 characters long"
        );
    }

    #[test]
    fn test_update_replaces_name_and_description() {
        let category = Category::create("Horror", "old", true).unwrap();
        let updated = category.update("Drama", Some("new")).unwrap();
        assert_eq!(updated.name(), "Drama");
        assert_eq!(updated.description(), "new");
    }

    #[test]
    fn test_update_without_description_preserves_it() {
        let category = Category::create("Horror", "keep me", true).unwrap();
        let updated = category.update("Drama", None).unwrap();
        assert_eq!(updated.description(), "keep me");
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let category = Category::create("Horror", "", true).unwrap();
        let updated = category.update("Drama", None).unwrap();
        assert_eq!(updated.id(), category.id());
        assert_eq!(updated.created_at(), category.created_at());
    }

    #[test]
    fn test_failed_update_leaves_original_untouched() {
        let category = Category::create("Horror", "desc", true).unwrap();
        assert!(category.update("x", None).is_err());
        assert_eq!(category.name(), "Horror");
    }

    #[test]
    fn test_activate_and_deactivate() {
        let category = Category::create("Horror", "", false).unwrap();
        let active = category.activate().unwrap();
        assert!(active.is_active());
        let inactive = active.deactivate().unwrap();
        assert!(!inactive.is_active());
    }
}
