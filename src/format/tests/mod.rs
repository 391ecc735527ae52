//! Unit tests for the exchange conversion routines.
//!
//! These tests run the exporter and importer against real files in
//! temporary directories and verify the round-trip properties of the
//! conversion.


use crate::geometry::Point2;

/// Axis-aligned square ring used as polygon test geometry.
pub(crate) fn square_ring(origin_x: f64, origin_y: f64, size: f64) -> Vec<Point2> {
    vec![
        Point2::new(origin_x, origin_y),
        Point2::new(origin_x + size, origin_y),
        Point2::new(origin_x + size, origin_y + size),
        Point2::new(origin_x, origin_y + size),
    ]
}
