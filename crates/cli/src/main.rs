mod input;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use input::{parse_point, NodesArg};
use planegeom::api::*;
use serde::Serialize;
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar hit-testing helpers; prints one JSON object per call")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Euclidean distance between two points
    Distance {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        from: Point,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        to: Point,
    },
    /// Distance from a point to a segment, plus the closest point on it
    SegmentDistance {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        point: Point,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        start: Point,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        end: Point,
    },
    /// Distance from a point to the infinite line through two points
    LineDistance {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        point: Point,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        start: Point,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        end: Point,
    },
    /// Whether a point lies in a round or square region around a center
    InRegion {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        point: Point,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        center: Point,
        #[arg(long, default_value_t = DEFAULT_REGION_RADIUS)]
        radius: f64,
        /// "round" or "square"
        #[arg(long, default_value = "round")]
        kind: String,
    },
    /// Angle in degrees between the ray from→to and the x-axis
    Angle {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        from: Point,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        to: Point,
        /// Reflect left-pointing rays to 180 - angle
        #[arg(long)]
        direction: bool,
    },
    /// Closest node to a point
    Nearest {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        point: Point,
        #[command(flatten)]
        nodes: NodesArg,
    },
    /// Point on a circle; prints the raw offset and center + offset
    OnCircle {
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long)]
        radius: f64,
        /// top, left, bottom or right
        #[arg(long, default_value = "right")]
        start: String,
        #[arg(long)]
        clockwise: bool,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point, default_value = "0,0")]
        center: Point,
    },
    /// Last node whose region contains the point
    OnNode {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        point: Point,
        #[command(flatten)]
        nodes: NodesArg,
        #[arg(long)]
        radius: Option<f64>,
        /// "round" or "square"
        #[arg(long)]
        kind: Option<String>,
    },
    /// Print library name, version and code revision
    Report,
}

#[derive(Serialize)]
struct Xy {
    x: f64,
    y: f64,
}

impl From<Point> for Xy {
    fn from(p: Point) -> Self {
        Xy { x: p.x, y: p.y }
    }
}

#[derive(Serialize)]
struct Hit {
    index: isize,
    x: f64,
    y: f64,
}

impl From<PointInfo> for Hit {
    fn from(info: PointInfo) -> Self {
        Hit {
            index: info.index,
            x: info.data.x,
            y: info.data.y,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = run(cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run(action: Action) -> Result<Value> {
    let out = match action {
        Action::Distance { from, to } => {
            tracing::info!(?from, ?to, "distance");
            json!({ "distance": distance_between_points(from, to) })
        }
        Action::SegmentDistance { point, start, end } => {
            tracing::info!(?point, ?start, ?end, "segment_distance");
            let closest = closest_point_on_segment(point, start, end);
            json!({
                "distance": distance_to_segment(point, start, end),
                "closest": Xy::from(closest),
            })
        }
        Action::LineDistance { point, start, end } => {
            tracing::info!(?point, ?start, ?end, "line_distance");
            json!({ "distance": distance_to_line(point, start, end) })
        }
        Action::InRegion {
            point,
            center,
            radius,
            kind,
        } => {
            tracing::info!(?point, ?center, radius, kind = %kind, "in_region");
            json!({ "inside": point_in_region_named(point, center, radius, &kind) })
        }
        Action::Angle {
            from,
            to,
            direction,
        } => {
            tracing::info!(?from, ?to, direction, "angle");
            json!({ "degrees": angle_to_x_axis(from, to, direction) })
        }
        Action::Nearest { point, nodes } => {
            let pts = nodes.load()?;
            tracing::info!(?point, nodes = pts.len(), "nearest");
            serde_json::to_value(Hit::from(nearest_point(point, &pts)?))?
        }
        Action::OnCircle {
            angle,
            radius,
            start,
            clockwise,
            center,
        } => {
            tracing::info!(angle, radius, start = %start, clockwise, ?center, "on_circle");
            let dir = StartDirection::from_name(&start);
            let offset = point_on_circle(center, angle, radius, dir, clockwise);
            json!({
                "offset": Xy::from(offset),
                "absolute": Xy::from(center + offset),
            })
        }
        Action::OnNode {
            point,
            nodes,
            radius,
            kind,
        } => {
            let pts = nodes.load()?;
            tracing::info!(?point, nodes = pts.len(), ?radius, ?kind, "on_node");
            let hit = point_on_any_node_named(point, &pts, radius, kind.as_deref());
            serde_json::to_value(Hit::from(hit))?
        }
        Action::Report => report::report(),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<Value> {
        let cmd = Cmd::try_parse_from(std::iter::once("cli").chain(args.iter().copied()))?;
        run(cmd.action)
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }

    #[test]
    fn line_distance_command() {
        let out = run_args(&["line-distance", "--point", "0,5", "--start", "0,0", "--end", "10,0"])
            .unwrap();
        assert_eq!(out["distance"], 5.0);
    }

    #[test]
    fn segment_distance_accepts_negative_coordinates() {
        let out = run_args(&[
            "segment-distance",
            "--point",
            "-3,4",
            "--start",
            "0,0",
            "--end",
            "10,0",
        ])
        .unwrap();
        assert_eq!(out["distance"], 5.0);
        assert_eq!(out["closest"]["x"], 0.0);
    }

    #[test]
    fn in_region_with_unknown_kind_is_false() {
        let out = run_args(&["in-region", "--point", "1,1", "--center", "1,1", "--kind", "hex"])
            .unwrap();
        assert_eq!(out["inside"], false);
    }

    #[test]
    fn nearest_and_on_node_report_indices() {
        let out = run_args(&["nearest", "--point", "0,0", "--points", "9,9;1,0;0,1"]).unwrap();
        assert_eq!(out["index"], 1);
        let out = run_args(&["on-node", "--point", "0,0", "--points", "1,0;9,9;0,1"]).unwrap();
        assert_eq!(out["index"], 2);
        let out = run_args(&["on-node", "--point", "0,0", "--points", "9,9"]).unwrap();
        assert_eq!(out["index"], -1);
    }

    #[test]
    fn nearest_with_no_nodes_fails() {
        assert!(run_args(&["nearest", "--point", "0,0", "--points", ""]).is_err());
        assert!(run_args(&["nearest", "--point", "0,0"]).is_err());
    }

    #[test]
    fn on_circle_reports_offset_and_absolute() {
        let out = run_args(&[
            "on-circle", "--angle", "0", "--radius", "2", "--start", "top", "--center", "10,10",
        ])
        .unwrap();
        assert_eq!(out["offset"]["x"], 0.0);
        assert_eq!(out["offset"]["y"], 2.0);
        assert_eq!(out["absolute"]["y"], 12.0);
    }

    #[test]
    fn angle_command_with_direction() {
        let out = run_args(&["angle", "--from", "0,0", "--to", "-1,1", "--direction"]).unwrap();
        assert_eq!(out["degrees"], 135);
    }
}
