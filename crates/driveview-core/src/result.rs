//! Convenience result type alias for DriveView.

use crate::error::AppError;

/// A specialized `Result` type for DriveView operations.
pub type AppResult<T> = Result<T, AppError>;
