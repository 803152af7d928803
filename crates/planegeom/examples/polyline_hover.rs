//! Walk a cursor along a polyline and report what it is hovering.
//!
//! Usage:
//!   cargo run -p planegeom --example polyline_hover
//!
//! For each cursor position prints the node under the cursor (if any), the
//! nearest node, and the distance to the closest polyline edge.

use planegeom::prelude::*;

fn main() {
    let nodes = [
        Point::new(0.0, 0.0),
        Point::new(40.0, 10.0),
        Point::new(80.0, 0.0),
        Point::new(120.0, 30.0),
    ];
    let cfg = RegionCfg {
        radius: 6.0,
        shape: RegionShape::Square,
    };
    for step in 0..=12 {
        let cursor = Point::new(step as f64 * 10.0, 4.0);
        let on_node = point_on_any_node(cursor, &nodes, cfg);
        let nearest = match nearest_point(cursor, &nodes) {
            Ok(info) => info,
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        };
        let edge_dist = nodes
            .windows(2)
            .map(|w| distance_to_segment(cursor, w[0], w[1]))
            .fold(f64::INFINITY, f64::min);
        println!(
            "cursor=({:>5.1},{:>4.1}) on_node={:>2} nearest={} edge_dist={:.2} heading={}°",
            cursor.x,
            cursor.y,
            on_node.index,
            nearest.index,
            edge_dist,
            angle_to_x_axis(cursor, nearest.data, true),
        );
    }
}
