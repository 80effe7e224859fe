//! # catalog-core
//!
//! Core crate for the catalog administration backend. Contains the unified
//! error system, domain validation helpers, the search/pagination contract
//! shared by every list-style query, repository and unit-of-work traits,
//! and configuration schemas.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
