//! List query parameter extractor.

use serde::{Deserialize, Serialize};

use catalog_core::types::search::{DEFAULT_PAGE, DEFAULT_PER_PAGE, SearchOrder};
use catalog_service::common::ListInput;

/// Query parameters for list endpoints:
/// `?page=&per_page=&search=&sort=&dir=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 15).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Substring filter over the display name.
    pub search: Option<String>,
    /// Sort field: `name`, `id`, or `created_at` (default: `name`).
    pub sort: Option<String>,
    /// Sort direction: `asc` or `desc` (default: `asc`).
    pub dir: Option<String>,
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

impl ListParams {
    /// Converts to the use-case list input.
    pub fn into_list_input(self) -> ListInput {
        ListInput {
            page: self.page,
            per_page: self.per_page,
            search: self.search.unwrap_or_default(),
            sort: self.sort.unwrap_or_default(),
            dir: self
                .dir
                .as_deref()
                .map(SearchOrder::parse)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_query() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        let input = params.into_list_input();
        assert_eq!(input.page, 1);
        assert_eq!(input.per_page, 15);
        assert!(input.search.is_empty());
        assert_eq!(input.dir, SearchOrder::Asc);
    }

    #[test]
    fn test_dir_parses_case_insensitively() {
        let params = ListParams {
            page: 1,
            per_page: 15,
            search: None,
            sort: None,
            dir: Some("DESC".into()),
        };
        assert_eq!(params.into_list_input().dir, SearchOrder::Desc);
    }
}
