//! Convenience result type alias for the geo processor.

use crate::error::AppError;

/// A specialized `Result` type for geo processor operations.
pub type AppResult<T> = Result<T, AppError>;
