//! Category use cases.

pub mod service;

pub use service::{
    CategoryOutput, CategoryService, CreateCategoryInput, UpdateCategoryInput,
};
