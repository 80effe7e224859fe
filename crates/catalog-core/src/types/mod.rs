//! Shared contract types.

pub mod search;

pub use search::{SearchInput, SearchOrder, SearchOutput, SearchableEntity, SortKey};
