//! Computes the centroid and bounding box of a validated point list.

use crate::types::{Bounds, Point, PointList, PointsSummary};

use super::rounding::{COORDINATE_DECIMALS, round_to};

/// Centroid (arithmetic mean) and bounding box of `points`, every value
/// rounded to [`COORDINATE_DECIMALS`] places.
///
/// `PointList` is non-empty by construction, so this cannot fail.
pub fn summarize(points: &PointList) -> PointsSummary {
    let mut bounds = Bounds::around(points.first());
    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;

    for point in points {
        bounds.extend(*point);
        lat_sum += point.lat;
        lng_sum += point.lng;
    }

    let count = points.len() as f64;
    // Summation error can push the mean an ulp outside the extrema.
    let centroid = Point::new(
        (lat_sum / count).clamp(bounds.south, bounds.north),
        (lng_sum / count).clamp(bounds.west, bounds.east),
    );

    tracing::debug!(points = points.len(), "Aggregated point list");

    PointsSummary {
        centroid: round_point(centroid),
        bounds: round_bounds(bounds),
    }
}

fn round_point(point: Point) -> Point {
    Point::new(
        round_to(point.lat, COORDINATE_DECIMALS),
        round_to(point.lng, COORDINATE_DECIMALS),
    )
}

fn round_bounds(bounds: Bounds) -> Bounds {
    Bounds {
        north: round_to(bounds.north, COORDINATE_DECIMALS),
        south: round_to(bounds.south, COORDINATE_DECIMALS),
        east: round_to(bounds.east, COORDINATE_DECIMALS),
        west: round_to(bounds.west, COORDINATE_DECIMALS),
    }
}
