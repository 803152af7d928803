use super::distance::distance_between_points;
use super::types::Point;

/// Angle in whole degrees between the ray `p1 → p2` and the x-axis.
///
/// Computed as `asin(dy / |p2 - p1|)`, so the plain result lies in [-90, 90]
/// and cannot tell left-pointing rays from right-pointing ones. With
/// `is_direction`, a ray pointing left (`p2.x < p1.x`) is reflected to
/// `180 - angle`. This is not a full `atan2`: a down-left ray such as
/// (0,0)→(-1,-1) reports 225, while (0,0)→(1,-1) reports -45.
///
/// Coincident points give 0. Halves round toward +∞.
pub fn angle_to_x_axis(p1: Point, p2: Point, is_direction: bool) -> i32 {
    let dy = p2.y - p1.y;
    let dis = distance_between_points(p1, p2);
    let mut angle = if dis > 0.0 {
        let s = (dy / dis).clamp(-1.0, 1.0);
        (s.asin().to_degrees() + 0.5).floor() as i32
    } else {
        0
    };
    if is_direction && p2.x < p1.x {
        angle = 180 - angle;
    }
    angle
}
