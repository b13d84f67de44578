//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use geoproc_core::types::PointsSummary as PointsResponse;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
    /// Server time when the check was answered.
    pub timestamp: DateTime<Utc>,
}
