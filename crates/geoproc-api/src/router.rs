//! Route definitions for the geo processor HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes and the body-size limit.
///
/// Cross-cutting middleware is added by [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(points_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
}

/// Point aggregation
fn points_routes() -> Router<AppState> {
    Router::new().route("/points", post(handlers::points::process_points))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
