//! Query parameter extractors.

pub mod list_params;

pub use list_params::ListParams;
