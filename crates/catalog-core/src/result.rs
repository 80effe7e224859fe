//! Convenience result type alias for the catalog backend.

use crate::error::AppError;

/// A specialized `Result` type for catalog operations.
///
/// Defined as a convenience so that every crate does not need to write
/// `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;
