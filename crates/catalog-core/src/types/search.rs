//! The search contract shared by every list-style query.
//!
//! [`SearchInput`] and [`SearchOutput`] define the pagination, free-text
//! filter, and ordering request/response shape that every repository
//! backend must honor identically. The ordering policy lives here as well:
//! [`compare`] implements the primary-key comparison plus the fixed
//! tie-break, and [`execute`] runs the whole pipeline over an in-memory
//! collection. SQL backends mirror the same semantics through
//! `ORDER BY`/`LIMIT`/`OFFSET` clauses derived from the same types.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default page number.
pub const DEFAULT_PAGE: u64 = 1;
/// Default page size.
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SearchOrder {
    /// Parse a direction string case-insensitively; anything that is not
    /// `desc` is ascending.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// The field a search is ordered by.
///
/// An enumerated key rather than a raw field name: unrecognized or empty
/// input maps to [`SortKey::Name`], so callers can feed query-string values
/// straight through [`SortKey::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Order by display name (the default).
    #[default]
    Name,
    /// Order by entity id.
    Id,
    /// Order by creation timestamp.
    CreatedAt,
}

impl SortKey {
    /// Parse a field name case-insensitively, defaulting to `Name`.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "id" => Self::Id,
            "createdat" | "created_at" => Self::CreatedAt,
            _ => Self::Name,
        }
    }

    /// Return the SQL column this key sorts on.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Request parameters for a paginated, filtered, ordered search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInput {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Substring filter over the display name; empty means no filter.
    pub search: String,
    /// Field to order by.
    pub order_by: SortKey,
    /// Sort direction.
    pub order: SearchOrder,
}

impl SearchInput {
    /// Create a new search input, clamping `page` and `per_page` to ≥ 1.
    pub fn new(
        page: u64,
        per_page: u64,
        search: impl Into<String>,
        order_by: SortKey,
        order: SearchOrder,
    ) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            search: search.into(),
            order_by,
            order,
        }
    }

    /// Number of items to skip before the requested page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.per_page
    }

    /// Number of items on the requested page.
    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            order_by: SortKey::Name,
            order: SearchOrder::Asc,
        }
    }
}

/// One page of search results plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutput<T> {
    /// The page that was requested.
    pub current_page: u64,
    /// The page size that was requested.
    pub per_page: u64,
    /// Count of items matching the filter, before pagination.
    pub total: u64,
    /// The page slice, in the same order as the full filtered result.
    pub items: Vec<T>,
}

impl<T> SearchOutput<T> {
    /// Create a new search output.
    pub fn new(current_page: u64, per_page: u64, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Total number of pages for this result set.
    pub fn total_pages(&self) -> u64 {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page)
        }
    }
}

/// Capability set every searchable aggregate exposes.
///
/// The repository layer is generic over this trait: an id for point
/// lookups, a display name for the substring filter and default ordering,
/// and a creation timestamp for the tie-break.
pub trait SearchableEntity {
    /// Display type name, used in not-found messages.
    const KIND: &'static str;

    /// Unique entity id.
    fn id(&self) -> Uuid;

    /// The name the substring filter and name ordering apply to.
    fn display_name(&self) -> &str;

    /// Creation timestamp, set once at construction.
    fn created_at(&self) -> DateTime<Utc>;
}

/// Whether `name` survives the substring filter `search`.
///
/// Matching is case-insensitive; an empty filter matches everything.
pub fn matches_filter(name: &str, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&search.to_lowercase())
}

/// Total ordering of two entities under the requested key and direction.
///
/// Ties on the primary key always break by `created_at` ascending,
/// regardless of the primary direction, and then by id, so that repeated
/// identical searches paginate deterministically.
pub fn compare<T: SearchableEntity>(a: &T, b: &T, key: SortKey, order: SearchOrder) -> Ordering {
    let primary = match key {
        SortKey::Name => a.display_name().cmp(b.display_name()),
        SortKey::Id => a.id().cmp(&b.id()),
        SortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
    };
    let primary = match order {
        SearchOrder::Asc => primary,
        SearchOrder::Desc => primary.reverse(),
    };
    primary
        .then_with(|| a.created_at().cmp(&b.created_at()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// Run the full search pipeline over an in-memory collection:
/// filter, count, order, paginate.
pub fn execute<T>(rows: impl IntoIterator<Item = T>, input: &SearchInput) -> SearchOutput<T>
where
    T: SearchableEntity,
{
    let mut survivors: Vec<T> = rows
        .into_iter()
        .filter(|row| matches_filter(row.display_name(), &input.search))
        .collect();
    let total = survivors.len() as u64;

    survivors.sort_by(|a, b| compare(a, b, input.order_by, input.order));

    let items = survivors
        .into_iter()
        .skip(input.offset() as usize)
        .take(input.limit() as usize)
        .collect();

    SearchOutput::new(input.page, input.per_page, total, items)
}
