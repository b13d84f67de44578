//! Domain value types shared by the validator, the aggregator and the API.

pub mod point;

pub use point::{Bounds, Point, PointList, PointsSummary};
