//! Stage one: structural and type checks over the untyped payload.
//!
//! Produces either a [`PointList`] or the raw issues found, each carrying
//! only a location and a kind. Messages are attached later by
//! [`super::messages::render`].

use serde_json::{Map, Value};

use crate::types::{Point, PointList};

use super::kind::{IssueKind, MIN_POINTS};
use super::location::Location;

/// Name of the top-level array field.
pub const POINTS_FIELD: &str = "points";
/// Latitude field of a point object.
pub const LAT_FIELD: &str = "lat";
/// Longitude field of a point object.
pub const LNG_FIELD: &str = "lng";

/// An issue before message rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RawIssue {
    pub loc: Location,
    pub kind: IssueKind,
}

impl RawIssue {
    pub fn new(loc: Location, kind: IssueKind) -> Self {
        Self { loc, kind }
    }
}

/// Decodes a raw request body into a JSON value.
///
/// An empty (or whitespace-only) body is reported as `missing` at `[body]`;
/// malformed JSON as `json_invalid` at `[body, <byte offset>]`.
pub fn parse_body(body: &[u8]) -> Result<Value, RawIssue> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RawIssue::new(Location::body(), IssueKind::Missing));
    }

    serde_json::from_slice(body).map_err(|err| {
        let offset = byte_offset(body, err.line(), err.column());
        RawIssue::new(Location::body().index(offset), IssueKind::JsonInvalid)
    })
}

/// Checks the decoded payload and binds it to a [`PointList`].
///
/// Every point is inspected even after an earlier one fails, so the issue
/// list covers the whole payload. Within a point `lat` is checked before
/// `lng`. A point that is not an object yields a single issue.
pub fn check_payload(payload: &Value) -> Result<PointList, Vec<RawIssue>> {
    let body = Location::body();

    let Some(object) = payload.as_object() else {
        return Err(vec![RawIssue::new(body, IssueKind::ModelAttributesType)]);
    };

    let points_loc = body.key(POINTS_FIELD);
    let Some(raw_points) = object.get(POINTS_FIELD) else {
        return Err(vec![RawIssue::new(points_loc, IssueKind::Missing)]);
    };
    let Some(items) = raw_points.as_array() else {
        return Err(vec![RawIssue::new(points_loc, IssueKind::ListType)]);
    };
    if items.len() < MIN_POINTS {
        return Err(vec![RawIssue::new(points_loc, IssueKind::TooShort)]);
    }

    let mut issues = Vec::new();
    let mut points = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let item_loc = points_loc.index(index);
        match item.as_object() {
            Some(fields) => {
                if let Some(point) = check_point(fields, &item_loc, &mut issues) {
                    points.push(point);
                }
            }
            None => issues.push(RawIssue::new(item_loc, IssueKind::ModelAttributesType)),
        }
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    // Non-empty here: at least MIN_POINTS items and none failed.
    PointList::new(points).ok_or_else(|| vec![RawIssue::new(points_loc, IssueKind::TooShort)])
}

fn check_point(
    fields: &Map<String, Value>,
    loc: &Location,
    issues: &mut Vec<RawIssue>,
) -> Option<Point> {
    let lat = check_coordinate(fields, LAT_FIELD, loc, issues);
    let lng = check_coordinate(fields, LNG_FIELD, loc, issues);
    Some(Point::new(lat?, lng?))
}

fn check_coordinate(
    fields: &Map<String, Value>,
    name: &'static str,
    point_loc: &Location,
    issues: &mut Vec<RawIssue>,
) -> Option<f64> {
    let loc = point_loc.key(name);
    let Some(value) = fields.get(name) else {
        issues.push(RawIssue::new(loc, IssueKind::Missing));
        return None;
    };

    match coerce_number(value) {
        Ok(number) => Some(number),
        Err(kind) => {
            issues.push(RawIssue::new(loc, kind));
            None
        }
    }
}

/// Accepts JSON numbers and numeric strings; the result must be finite.
pub fn coerce_number(value: &Value) -> Result<f64, IssueKind> {
    let number = match value {
        Value::Number(n) => n.as_f64().ok_or(IssueKind::FloatType)?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| IssueKind::FloatParsing)?,
        _ => return Err(IssueKind::FloatType),
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(IssueKind::FiniteNumber)
    }
}

/// Converts serde_json's one-based line/column into a zero-based byte offset.
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(body.len())
}
