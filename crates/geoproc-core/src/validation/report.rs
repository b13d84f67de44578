//! Rendered validation errors as returned to the client.

use serde::Serialize;
use thiserror::Error;

use super::kind::IssueKind;
use super::location::Location;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    /// Where the failure is.
    pub loc: Location,
    /// Human-readable message.
    pub msg: String,
    /// Machine-readable kind.
    #[serde(rename = "type")]
    pub kind: IssueKind,
}

/// Every validation failure for one request, in discovery order.
///
/// Serialises as the HTTP 400 body: `{"detail": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{} validation error(s), first at {}: {}", .detail.len(), first_loc(.detail), first_msg(.detail))]
pub struct ValidationReport {
    pub detail: Vec<ErrorDetail>,
}

impl ValidationReport {
    pub fn new(detail: Vec<ErrorDetail>) -> Self {
        Self { detail }
    }

    pub fn first(&self) -> Option<&ErrorDetail> {
        self.detail.first()
    }

    pub fn len(&self) -> usize {
        self.detail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detail.is_empty()
    }
}

fn first_loc(detail: &[ErrorDetail]) -> String {
    detail.first().map(|d| d.loc.to_string()).unwrap_or_default()
}

fn first_msg(detail: &[ErrorDetail]) -> &str {
    detail.first().map(|d| d.msg.as_str()).unwrap_or_default()
}
