//! # geoproc-core
//!
//! Core crate for the geo processor. Contains configuration schemas, the
//! point/bounds domain types, the two-stage request validator, the
//! centroid/bounding-box aggregator, and the unified error system.
//!
//! This crate has **no** HTTP dependencies; the API layer lives in
//! `geoproc-api`.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod result;
pub mod types;
pub mod validation;

pub use aggregate::summarize;
pub use error::AppError;
pub use result::AppResult;
pub use validation::{ValidationReport, validate_points};
