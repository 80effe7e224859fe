//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_service::category::CategoryOutput;
use catalog_service::genre::GenreOutput;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Total item count matching the filter.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total pages.
    pub total_pages: u64,
}

/// Category summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// Category ID.
    pub id: Uuid,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Active flag.
    pub is_active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<CategoryOutput> for CategoryResponse {
    fn from(output: CategoryOutput) -> Self {
        Self {
            id: output.id,
            name: output.name,
            description: output.description,
            is_active: output.is_active,
            created_at: output.created_at,
        }
    }
}

/// Genre summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreResponse {
    /// Genre ID.
    pub id: Uuid,
    /// Name.
    pub name: String,
    /// Active flag.
    pub is_active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Associated category ids.
    pub categories: Vec<Uuid>,
}

impl From<GenreOutput> for GenreResponse {
    fn from(output: GenreOutput) -> Self {
        Self {
            id: output.id,
            name: output.name,
            is_active: output.is_active,
            created_at: output.created_at,
            categories: output.categories,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Whether the database answered.
    pub database: bool,
}
