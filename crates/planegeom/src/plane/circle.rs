use super::cfg::{StartDirection, CIRCLE_DECIMALS};
use super::types::Point;

/// Offset of the point at `angle` degrees on a circle of `radius`.
///
/// IMPORTANT: the result is relative to the origin. `center` is accepted for
/// call-site symmetry but is not added; callers place the point with
/// `center + offset`.
///
/// - `start` rotates the zero-angle axis counter-clockwise
///   (top +90°, left +180°, bottom +270°, right +0°).
/// - `clockwise` flips the sense of rotation of the final angle.
/// - Both coordinates are rounded to two decimals.
pub fn point_on_circle(
    center: Point,
    angle: f64,
    radius: f64,
    start: StartDirection,
    clockwise: bool,
) -> Point {
    let _ = center;
    let mut radian = (angle + start.offset_degrees()).to_radians();
    if clockwise {
        radian = -radian;
    }
    Point::new(
        round_to(radian.cos() * radius, CIRCLE_DECIMALS),
        round_to(radian.sin() * radius, CIRCLE_DECIMALS),
    )
}

#[inline]
fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let r = (v * scale).round() / scale;
    // normalise -0.0 so offsets compare cleanly
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
