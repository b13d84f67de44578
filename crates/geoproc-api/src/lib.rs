//! # geoproc-api
//!
//! HTTP API layer for the geo processor built on Axum.
//!
//! Provides the `POST /api/points` and `GET /api/health` endpoints, the
//! validating body extractor, middleware (CORS, compression, request
//! logging), and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
