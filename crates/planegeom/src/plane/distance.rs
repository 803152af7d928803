use super::types::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance_between_points(p1: Point, p2: Point) -> f64 {
    (p1.to_vector() - p2.to_vector()).norm()
}

/// Closest point to `point` on the segment `[line_start, line_end]`.
///
/// Pre: none; a zero-length segment collapses to `line_start`.
/// Post: `r <= 0` clamps to `line_start`, `r >= 1` clamps to `line_end`,
/// otherwise `line_start + r (line_end - line_start)`.
pub fn closest_point_on_segment(point: Point, line_start: Point, line_end: Point) -> Point {
    if line_start == line_end {
        return line_start;
    }
    let s = line_start.to_vector();
    let d = line_end.to_vector() - s;
    let r = (point.to_vector() - s).dot(&d) / d.norm_squared();
    if r <= 0.0 {
        line_start
    } else if r >= 1.0 {
        line_end
    } else {
        Point::from(s + d * r)
    }
}

/// Shortest distance from `point` to the segment `[line_start, line_end]`.
#[inline]
pub fn distance_to_segment(point: Point, line_start: Point, line_end: Point) -> f64 {
    distance_between_points(point, closest_point_on_segment(point, line_start, line_end))
}

/// Shortest distance from `point` to the infinite line through `line_start`
/// and `line_end`.
///
/// Equal x-coordinates are treated as a vertical line (this includes the
/// coincident-endpoint case). Otherwise the line is written `y = A x + B`.
pub fn distance_to_line(point: Point, line_start: Point, line_end: Point) -> f64 {
    if line_start.x == line_end.x {
        return (point.x - line_start.x).abs();
    }
    let a = (line_start.y - line_end.y) / (line_start.x - line_end.x);
    let b = line_start.y - a * line_start.x;
    ((a * point.x + b - point.y) / (a * a + 1.0).sqrt()).abs()
}
