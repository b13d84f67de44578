//! Points, point lists, and the aggregation result.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in raw coordinate space.
///
/// No range check is applied; any finite value is a valid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An ordered, non-empty sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PointList(Vec<Point>);

#[allow(clippy::len_without_is_empty)]
impl PointList {
    /// Wraps `points`, returning `None` when the vector is empty.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self(points))
        }
    }

    /// The first point. Always present.
    pub fn first(&self) -> Point {
        self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Axis-aligned bounding box, in raw coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Maximum latitude.
    pub north: f64,
    /// Minimum latitude.
    pub south: f64,
    /// Maximum longitude.
    pub east: f64,
    /// Minimum longitude.
    pub west: f64,
}

impl Bounds {
    /// Degenerate box around a single point.
    pub fn around(point: Point) -> Self {
        Self {
            north: point.lat,
            south: point.lat,
            east: point.lng,
            west: point.lng,
        }
    }

    /// Grows the box to cover `point`.
    pub fn extend(&mut self, point: Point) {
        self.north = self.north.max(point.lat);
        self.south = self.south.min(point.lat);
        self.east = self.east.max(point.lng);
        self.west = self.west.min(point.lng);
    }
}

/// Centroid and bounding box of a point list. Serialises as the
/// `POST /api/points` success body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointsSummary {
    pub centroid: Point,
    pub bounds: Bounds,
}
