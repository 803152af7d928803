//! Planar hit-testing helpers.
//!
//! Purpose
//! - Small, stateless functions a drawing layer uses to decide what the
//!   pointer is touching: distances to segments and lines, region tests,
//!   nearest-point and node lookups, plus angle and circle helpers.
//! - Everything is pure except one `tracing::warn!` for an unknown region kind.
//!
//! Conventions
//! - Points are `Copy` values; no function mutates its inputs.
//! - Searches report `PointInfo`, with `PointInfo::NOT_FOUND` as the miss value.
//! - `point_on_circle` returns an offset from the origin, not an absolute point.
//!
//! Code cross-refs: `Point`, `PointInfo`, `RegionShape`, `RegionCfg`, `StartDirection`

mod angle;
pub mod cfg;
mod circle;
mod distance;
mod error;
mod region;
mod search;
mod types;

pub use angle::angle_to_x_axis;
pub use cfg::{RegionCfg, RegionShape, StartDirection, CIRCLE_DECIMALS, DEFAULT_REGION_RADIUS};
pub use circle::point_on_circle;
pub use distance::{
    closest_point_on_segment, distance_between_points, distance_to_line, distance_to_segment,
};
pub use error::GeomError;
pub use region::{point_in_region, point_in_region_named};
pub use search::{nearest_point, point_on_any_node, point_on_any_node_named};
pub use types::{Point, PointInfo};
