//! Custom Axum extractors.

pub mod points;

pub use points::ValidatedPoints;
