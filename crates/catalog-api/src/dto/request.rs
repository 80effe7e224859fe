//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create category request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: String,
    /// Description; absent means empty.
    pub description: Option<String>,
    /// Active flag; absent means active.
    pub is_active: Option<bool>,
}

/// Update category request body. Absent fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    /// New name.
    pub name: String,
    /// New description, when supplied.
    pub description: Option<String>,
    /// New active flag, when supplied.
    pub is_active: Option<bool>,
}

/// Create genre request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenreRequest {
    /// Genre name.
    pub name: String,
    /// Active flag; absent means active.
    pub is_active: Option<bool>,
    /// Category ids to associate, in order.
    #[serde(default)]
    pub categories_ids: Vec<Uuid>,
}

/// Update genre request body. Absent fields keep their current value;
/// a present `categories_ids` replaces the associations wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGenreRequest {
    /// New name.
    pub name: String,
    /// New active flag, when supplied.
    pub is_active: Option<bool>,
    /// Replacement category ids, when supplied.
    pub categories_ids: Option<Vec<Uuid>>,
}
