//! Planar geometry helpers for pointer hit-testing.
//!
//! Everything lives in [`plane`]; the common surface is re-exported here and
//! in [`prelude`]. Functions are pure and thread-safe. The only side effect is
//! a `tracing` warning when a region kind string is not recognised.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are fine when they make call sites clearer.

pub mod api;
pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use plane::{GeomError, Point, PointInfo, RegionCfg, RegionShape, StartDirection};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::{
        angle_to_x_axis, closest_point_on_segment, distance_between_points, distance_to_line,
        distance_to_segment, nearest_point, point_in_region, point_in_region_named,
        point_on_any_node, point_on_any_node_named, point_on_circle, GeomError, Point, PointInfo,
        RegionCfg, RegionShape, StartDirection,
    };
    pub use nalgebra::Vector2 as Vec2;
}
