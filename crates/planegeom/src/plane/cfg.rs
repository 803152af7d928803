//! Defaults and small option types for the plane helpers.
//!
//! Policy
//! - Defaults are fixed constants. Per-call overrides go through `RegionCfg`
//!   or the explicit function arguments, never through global state.

use super::error::GeomError;
use std::fmt;
use std::str::FromStr;

/// Hit-test radius used when the caller does not pass one.
pub const DEFAULT_REGION_RADIUS: f64 = 5.0;
/// Decimal places kept by `point_on_circle`.
pub const CIRCLE_DECIMALS: i32 = 2;

/// Shape of a hit-test region around a center point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegionShape {
    /// Disc of the given radius.
    #[default]
    Round,
    /// Axis-aligned square with half-width equal to the radius.
    Square,
}

impl RegionShape {
    pub fn name(self) -> &'static str {
        match self {
            RegionShape::Round => "round",
            RegionShape::Square => "square",
        }
    }
}

impl fmt::Display for RegionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegionShape {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round" => Ok(RegionShape::Round),
            "square" => Ok(RegionShape::Square),
            other => Err(GeomError::UnknownRegionShape(other.to_string())),
        }
    }
}

/// Region parameters for node hit-testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionCfg {
    pub radius: f64,
    pub shape: RegionShape,
}

impl Default for RegionCfg {
    fn default() -> Self {
        Self {
            radius: DEFAULT_REGION_RADIUS,
            shape: RegionShape::default(),
        }
    }
}

/// Reference axis that angle 0 points along in `point_on_circle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartDirection {
    Top,
    Left,
    Bottom,
    #[default]
    Right,
}

impl StartDirection {
    /// Lenient lookup: unknown names fall back to `Right`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "top" => StartDirection::Top,
            "left" => StartDirection::Left,
            "bottom" => StartDirection::Bottom,
            _ => StartDirection::Right,
        }
    }

    /// Counter-clockwise rotation of the reference axis from +x, in degrees.
    #[inline]
    pub fn offset_degrees(self) -> f64 {
        match self {
            StartDirection::Top => 90.0,
            StartDirection::Left => 180.0,
            StartDirection::Bottom => 270.0,
            StartDirection::Right => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_shape_parses_known_names_only() {
        assert_eq!("round".parse::<RegionShape>(), Ok(RegionShape::Round));
        assert_eq!("square".parse::<RegionShape>(), Ok(RegionShape::Square));
        assert_eq!(
            "Round".parse::<RegionShape>(),
            Err(GeomError::UnknownRegionShape("Round".into()))
        );
        assert_eq!(RegionShape::Square.to_string(), "square");
    }

    #[test]
    fn defaults_match_hit_test_conventions() {
        let cfg = RegionCfg::default();
        assert_eq!(cfg.radius, 5.0);
        assert_eq!(cfg.shape, RegionShape::Round);
        assert_eq!(StartDirection::default(), StartDirection::Right);
    }

    #[test]
    fn start_direction_falls_back_to_right() {
        assert_eq!(StartDirection::from_name("top"), StartDirection::Top);
        assert_eq!(StartDirection::from_name("bottom"), StartDirection::Bottom);
        assert_eq!(StartDirection::from_name("north"), StartDirection::Right);
        assert_eq!(StartDirection::Left.offset_degrees(), 180.0);
    }
}
