//! Shared list-request/response shapes.

use serde::{Deserialize, Serialize};

use catalog_core::types::search::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, SearchInput, SearchOrder, SortKey,
};

/// Input for list use cases; maps 1:1 onto a [`SearchInput`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInput {
    /// Page number (1-based).
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Substring filter over the display name; empty means no filter.
    pub search: String,
    /// Sort field name; unrecognized or empty values sort by name.
    pub sort: String,
    /// Sort direction.
    pub dir: SearchOrder,
}

impl ListInput {
    /// Translate into the repository search contract.
    pub fn to_search_input(&self) -> SearchInput {
        SearchInput::new(
            self.page,
            self.per_page,
            self.search.clone(),
            SortKey::parse(&self.sort),
            self.dir,
        )
    }
}

impl Default for ListInput {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            sort: String::new(),
            dir: SearchOrder::Asc,
        }
    }
}

/// One page of use-case output items plus pagination metadata, carried
/// over unchanged from the repository search output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOutput<T> {
    /// The page that was requested.
    pub page: u64,
    /// The page size that was requested.
    pub per_page: u64,
    /// Count of items matching the filter, before pagination.
    pub total: u64,
    /// The page slice, order preserved.
    pub items: Vec<T>,
}

impl<T> ListOutput<T> {
    /// Total number of pages for this result set.
    pub fn total_pages(&self) -> u64 {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_search_input_parses_sort_and_clamps() {
        let input = ListInput {
            page: 0,
            per_page: 0,
            search: "horror".into(),
            sort: "CreatedAt".into(),
            dir: SearchOrder::Desc,
        };
        let search = input.to_search_input();
        assert_eq!(search.page, 1);
        assert_eq!(search.per_page, 1);
        assert_eq!(search.search, "horror");
        assert_eq!(search.order_by, SortKey::CreatedAt);
        assert_eq!(search.order, SearchOrder::Desc);
    }

    #[test]
    fn test_unknown_sort_falls_back_to_name() {
        let input = ListInput {
            sort: "popularity".into(),
            ..ListInput::default()
        };
        assert_eq!(input.to_search_input().order_by, SortKey::Name);
    }

    #[test]
    fn test_default_paging() {
        let input = ListInput::default();
        assert_eq!(input.page, 1);
        assert_eq!(input.per_page, 15);
    }
}
