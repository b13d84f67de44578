//! Stage two: attach human-readable messages to raw issues.
//!
//! Pure rewrite keyed on the issue kind and the shape of its location.
//! Only `missing` has location-specific templates; the container segment
//! (`body` versus a point index) selects which one.

use super::kind::IssueKind;
use super::location::{BODY, PathSegment};
use super::report::{ErrorDetail, ValidationReport};
use super::validator::RawIssue;

/// Renders raw issues into a report, preserving order.
pub fn render(issues: Vec<RawIssue>) -> ValidationReport {
    ValidationReport::new(issues.into_iter().map(render_issue).collect())
}

fn render_issue(issue: RawIssue) -> ErrorDetail {
    let msg = message_for(&issue);
    ErrorDetail {
        loc: issue.loc,
        msg,
        kind: issue.kind,
    }
}

/// Message for a single issue.
pub fn message_for(issue: &RawIssue) -> String {
    match (issue.kind, issue.loc.parent(), issue.loc.leaf()) {
        (IssueKind::Missing, Some(PathSegment::Key(container)), Some(PathSegment::Key(field)))
            if container == BODY =>
        {
            format!(
                "Body does not include the required '{}' value",
                human_name(field)
            )
        }
        (IssueKind::Missing, Some(PathSegment::Index(index)), Some(PathSegment::Key(field))) => {
            format!(
                "Point {index} does not include the required '{}' value",
                human_name(field)
            )
        }
        (kind, _, _) => kind.default_message(),
    }
}

/// Display name for a field; unknown names pass through.
fn human_name(field: &str) -> &str {
    match field {
        "lat" => "latitude",
        "lng" => "longitude",
        other => other,
    }
}
