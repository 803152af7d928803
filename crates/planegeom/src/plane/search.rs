//! Linear scans over candidate points: nearest point and node hit-testing.

use super::cfg::{RegionCfg, DEFAULT_REGION_RADIUS};
use super::distance::distance_between_points;
use super::error::GeomError;
use super::region::{parse_shape_or_warn, point_in_region};
use super::types::{Point, PointInfo};

/// Candidate in `points` closest to `point`.
///
/// Ties keep the earliest candidate (strict `<`).
/// Errors with `GeomError::EmptyPoints` when `points` is empty.
pub fn nearest_point(point: Point, points: &[Point]) -> Result<PointInfo, GeomError> {
    let (&first, rest) = points.split_first().ok_or(GeomError::EmptyPoints)?;
    let mut best = PointInfo::at(0, first);
    let mut best_dist = distance_between_points(point, first);
    for (k, &cand) in rest.iter().enumerate() {
        let d = distance_between_points(point, cand);
        if d < best_dist {
            best = PointInfo::at(k + 1, cand);
            best_dist = d;
        }
    }
    Ok(best)
}

/// Last node in `points` whose region (per `cfg`) contains `point`.
///
/// Every candidate is tested and each hit overwrites the previous one, so
/// when regions overlap the highest index wins. Returns
/// `PointInfo::NOT_FOUND` when nothing is hit.
pub fn point_on_any_node(point: Point, points: &[Point], cfg: RegionCfg) -> PointInfo {
    let mut res = PointInfo::NOT_FOUND;
    for (i, &node) in points.iter().enumerate() {
        if point_in_region(point, node, cfg.radius, cfg.shape) {
            res = PointInfo::at(i, node);
        }
    }
    res
}

/// Optional-argument form of [`point_on_any_node`].
///
/// `None` picks the defaults (radius 5, round). An unknown `kind` is logged
/// once and yields `PointInfo::NOT_FOUND`, since no node can match it.
pub fn point_on_any_node_named(
    point: Point,
    points: &[Point],
    radius: Option<f64>,
    kind: Option<&str>,
) -> PointInfo {
    let shape = match kind {
        Some(k) => match parse_shape_or_warn(k) {
            Some(s) => s,
            None => return PointInfo::NOT_FOUND,
        },
        None => Default::default(),
    };
    let cfg = RegionCfg {
        radius: radius.unwrap_or(DEFAULT_REGION_RADIUS),
        shape,
    };
    point_on_any_node(point, points, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::cfg::RegionShape;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn nearest_picks_minimum_not_last_improvement() {
        let q = p(0.0, 0.0);
        let pts = [p(10.0, 0.0), p(1.0, 1.0), p(3.0, 0.0), p(0.5, 0.0), p(2.0, 0.0)];
        let hit = nearest_point(q, &pts).unwrap();
        assert_eq!(hit.index, 3);
        assert_eq!(hit.data, p(0.5, 0.0));
    }

    #[test]
    fn nearest_ties_keep_first() {
        let q = p(0.0, 0.0);
        let pts = [p(5.0, 0.0), p(0.0, 1.0), p(1.0, 0.0), p(-1.0, 0.0)];
        assert_eq!(nearest_point(q, &pts).unwrap().index, 1);
    }

    #[test]
    fn nearest_on_exact_first_element() {
        let q = p(2.0, 3.0);
        let pts = [q, p(2.0, 3.5), p(9.0, 9.0)];
        let hit = nearest_point(q, &pts).unwrap();
        assert_eq!(hit, PointInfo { index: 0, data: q });
    }

    #[test]
    fn nearest_rejects_empty() {
        assert_eq!(nearest_point(p(0.0, 0.0), &[]), Err(GeomError::EmptyPoints));
    }

    #[test]
    fn any_node_last_match_wins() {
        let q = p(0.0, 0.0);
        let pts = [p(1.0, 0.0), p(50.0, 50.0), p(0.0, 2.0)];
        let hit = point_on_any_node(q, &pts, RegionCfg::default());
        assert_eq!(hit.index, 2);
        assert_eq!(hit.data, p(0.0, 2.0));
        assert_eq!(hit.found(), Some((2, p(0.0, 2.0))));
    }

    #[test]
    fn any_node_miss_is_sentinel() {
        let pts = [p(10.0, 10.0), p(-10.0, 3.0)];
        let hit = point_on_any_node(p(0.0, 0.0), &pts, RegionCfg::default());
        assert_eq!(hit, PointInfo::NOT_FOUND);
        assert_eq!(hit.data, Point::ORIGIN);
        assert!(!hit.is_found());
        assert!(point_on_any_node(p(0.0, 0.0), &[], RegionCfg::default()) == PointInfo::NOT_FOUND);
    }

    #[test]
    fn any_node_named_defaults_and_overrides() {
        let q = p(0.0, 0.0);
        let pts = [p(4.0, 4.0)];
        // default disc of radius 5 misses the corner, the square catches it
        assert!(!point_on_any_node_named(q, &pts, None, None).is_found());
        assert_eq!(point_on_any_node_named(q, &pts, None, Some("square")).index, 0);
        assert_eq!(point_on_any_node_named(q, &pts, Some(6.0), None).index, 0);
        assert_eq!(
            point_on_any_node_named(q, &pts, Some(6.0), Some("hexagon")),
            PointInfo::NOT_FOUND
        );
        let cfg = RegionCfg {
            radius: 4.0,
            shape: RegionShape::Square,
        };
        assert_eq!(point_on_any_node(q, &pts, cfg).index, 0);
    }
}
