//! Maps validation reports and `AppError` to HTTP responses.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use geoproc_core::error::{AppError, ErrorKind};
use geoproc_core::validation::ValidationReport;

/// Every error a handler or extractor can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload failed validation. Rendered as `{"detail": [...]}`.
    #[error(transparent)]
    Validation(#[from] ValidationReport),
    /// The body could not be read (too large, connection dropped).
    #[error(transparent)]
    Payload(#[from] BytesRejection),
    /// Any other application error.
    #[error(transparent)]
    App(#[from] AppError),
}

/// Body used for non-validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(report) => (StatusCode::BAD_REQUEST, Json(report)).into_response(),
            Self::Payload(rejection) => {
                tracing::warn!(error = %rejection, "Failed to read request body");
                rejection.into_response()
            }
            Self::App(err) => app_error_response(err),
        }
    }
}

fn app_error_response(err: AppError) -> Response {
    let (status, error_code) = match err.kind {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Configuration | ErrorKind::Internal => {
            tracing::error!(error = %err, "Internal server error");
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };

    let body = ApiErrorResponse {
        error: error_code.to_string(),
        message: err.message,
    };

    (status, Json(body)).into_response()
}
