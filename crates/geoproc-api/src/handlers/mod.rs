//! HTTP request handlers.

pub mod health;
pub mod points;

use axum::http::Uri;

use geoproc_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found(format!("No route for {}", uri.path())).into()
}
