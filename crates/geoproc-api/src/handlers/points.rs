//! Point aggregation handler.

use axum::Json;

use geoproc_core::summarize;

use crate::dto::response::PointsResponse;
use crate::extractors::ValidatedPoints;

/// POST /api/points
///
/// Validation failures are rejected by [`ValidatedPoints`] with HTTP 400
/// before this runs.
pub async fn process_points(ValidatedPoints(points): ValidatedPoints) -> Json<PointsResponse> {
    Json(summarize(&points))
}
