//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for the CLI and other in-repo callers. Names follow the
//! hit-testing vocabulary of the drawing layer.

// Distances
pub use crate::plane::{
    closest_point_on_segment, distance_between_points, distance_to_line, distance_to_segment,
};
// Region hit tests
pub use crate::plane::{
    point_in_region, point_in_region_named, RegionCfg, RegionShape, DEFAULT_REGION_RADIUS,
};
// Searches
pub use crate::plane::{nearest_point, point_on_any_node, point_on_any_node_named, PointInfo};
// Angles and circles
pub use crate::plane::{angle_to_x_axis, point_on_circle, StartDirection};
// Values and errors
pub use crate::plane::{GeomError, Point};
