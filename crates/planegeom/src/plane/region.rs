//! Point-in-region hit tests.

use super::cfg::RegionShape;
use super::types::Point;

/// True if `point` lies in the region of `shape` and `radius` centered at `area_point`.
///
/// Boundaries are inclusive for both shapes.
#[inline]
pub fn point_in_region(point: Point, area_point: Point, radius: f64, shape: RegionShape) -> bool {
    let dx = point.x - area_point.x;
    let dy = point.y - area_point.y;
    match shape {
        RegionShape::Round => dx * dx + dy * dy <= radius * radius,
        RegionShape::Square => dx.abs() <= radius && dy.abs() <= radius,
    }
}

/// String-keyed variant of [`point_in_region`].
///
/// An unknown `kind` is a recoverable usage error: it is reported through
/// `tracing::warn!` and the test answers `false`.
pub fn point_in_region_named(point: Point, area_point: Point, radius: f64, kind: &str) -> bool {
    match parse_shape_or_warn(kind) {
        Some(shape) => point_in_region(point, area_point, radius, shape),
        None => false,
    }
}

pub(crate) fn parse_shape_or_warn(kind: &str) -> Option<RegionShape> {
    match kind.parse::<RegionShape>() {
        Ok(shape) => Some(shape),
        Err(err) => {
            tracing::warn!(kind, "point_in_region: {err}");
            None
        }
    }
}
