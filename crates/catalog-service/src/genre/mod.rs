//! Genre use cases.

pub mod service;

pub use service::{CreateGenreInput, GenreOutput, GenreService, UpdateGenreInput};
