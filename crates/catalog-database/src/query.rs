//! SQL fragments shared by repository search implementations.
//!
//! The column names come from the enumerated sort key, never from raw user
//! input, so interpolating them into the query text is safe.

use catalog_core::types::search::{SearchOrder, SortKey};

/// `ORDER BY` clause for a search: the requested key and direction,
/// followed by the fixed `created_at ASC, id ASC` tie-break that keeps
/// pagination deterministic.
pub(crate) fn order_clause(key: SortKey, order: SearchOrder) -> String {
    let column = key.as_sql();
    let direction = order.as_sql();
    match key {
        SortKey::CreatedAt => format!("{column} {direction}, id ASC"),
        _ => format!("{column} {direction}, created_at ASC, id ASC"),
    }
}

/// `ILIKE` pattern for a substring search, escaping LIKE metacharacters so
/// the filter stays a literal substring match.
pub(crate) fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_clause_appends_tie_break() {
        assert_eq!(
            order_clause(SortKey::Name, SearchOrder::Asc),
            "name ASC, created_at ASC, id ASC"
        );
        assert_eq!(
            order_clause(SortKey::Name, SearchOrder::Desc),
            "name DESC, created_at ASC, id ASC"
        );
        assert_eq!(
            order_clause(SortKey::Id, SearchOrder::Desc),
            "id DESC, created_at ASC, id ASC"
        );
    }

    #[test]
    fn test_order_clause_by_created_at() {
        assert_eq!(
            order_clause(SortKey::CreatedAt, SearchOrder::Desc),
            "created_at DESC, id ASC"
        );
    }

    #[test]
    fn test_like_pattern_wraps_in_wildcards() {
        assert_eq!(like_pattern("Horror"), "%Horror%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
