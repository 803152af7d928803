//! Plain value types for planar hit-testing.
//!
//! - `Point`: a `Copy` 2D coordinate. Converts to/from `nalgebra::Vector2<f64>`
//!   so the math modules can use vector ops.
//! - `PointInfo`: index + copy of a matched point, with the `NOT_FOUND` sentinel.

use nalgebra::Vector2;
use std::ops::{Add, Sub};

/// 2D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Search result: position within the input slice plus a copy of the point.
///
/// `index == -1` together with `data == Point::ORIGIN` means "nothing matched".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointInfo {
    pub index: isize,
    pub data: Point,
}

impl PointInfo {
    pub const NOT_FOUND: PointInfo = PointInfo {
        index: -1,
        data: Point::ORIGIN,
    };

    #[inline]
    pub(crate) fn at(index: usize, data: Point) -> Self {
        Self {
            index: index as isize,
            data,
        }
    }
    #[inline]
    pub fn is_found(&self) -> bool {
        self.index >= 0
    }
    /// `Some((index, point))` unless this is the sentinel.
    #[inline]
    pub fn found(&self) -> Option<(usize, Point)> {
        usize::try_from(self.index).ok().map(|i| (i, self.data))
    }
}

impl Default for PointInfo {
    fn default() -> Self {
        Self::NOT_FOUND
    }
}
