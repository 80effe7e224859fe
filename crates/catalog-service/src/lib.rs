//! # catalog-service
//!
//! Use-case service layer for the catalog backend. Each service
//! orchestrates one repository call (plus a unit-of-work commit) per
//! request and translates between external input/output shapes and the
//! domain aggregates.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references to the backend-agnostic
//! repository traits.

pub mod category;
pub mod common;
pub mod genre;

pub use category::CategoryService;
pub use common::{ListInput, ListOutput};
pub use genre::GenreService;
