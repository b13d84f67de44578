//! Centroid and bounding-box aggregation.
//!
//! Planar arithmetic on raw coordinate values; no antimeridian handling.

pub mod aggregator;
pub mod rounding;

pub use aggregator::summarize;
pub use rounding::{COORDINATE_DECIMALS, round_to};
