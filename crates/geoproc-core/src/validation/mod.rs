//! Request payload validation.
//!
//! Two stages: [`validator`] inspects the untyped JSON and yields raw issues
//! (location + kind); [`messages`] turns those into the client-facing
//! [`ValidationReport`].

pub mod kind;
pub mod location;
pub mod messages;
pub mod report;
pub mod validator;

use serde_json::Value;

use crate::types::PointList;

pub use kind::IssueKind;
pub use location::{Location, PathSegment};
pub use report::{ErrorDetail, ValidationReport};
pub use validator::RawIssue;

/// Validates a decoded payload.
pub fn validate_points(payload: &Value) -> Result<PointList, ValidationReport> {
    validator::check_payload(payload).map_err(reject)
}

/// Decodes and validates a raw request body.
pub fn validate_body(body: &[u8]) -> Result<PointList, ValidationReport> {
    let payload = validator::parse_body(body).map_err(|issue| reject(vec![issue]))?;
    validate_points(&payload)
}

fn reject(issues: Vec<RawIssue>) -> ValidationReport {
    let report = messages::render(issues);
    tracing::debug!(issues = report.len(), error = %report, "Payload rejected");
    report
}
