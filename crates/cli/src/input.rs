//! Parsing of point arguments: `x,y` pairs, `;`-separated lists, JSON files.

use anyhow::{bail, Context, Result};
use clap::Args;
use planegeom::Point;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse `"x,y"` (whitespace around either number is ignored).
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((xs, ys)) = s.split_once(',') else {
        bail!("expected a point as `x,y`, got {s:?}");
    };
    let x: f64 = xs.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f64 = ys.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(Point::new(x, y))
}

/// Candidate nodes given inline. Wrapped so clap treats the list as one value.
#[derive(Clone, Debug, PartialEq)]
pub struct PointList(pub Vec<Point>);

/// Parse `"x,y;x,y;..."`. Empty entries are skipped.
pub fn parse_point_list(s: &str) -> Result<PointList> {
    s.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_point)
        .collect::<Result<Vec<_>>>()
        .map(PointList)
}

/// Read a JSON array of `[x, y]` pairs.
pub fn read_points_file(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

/// Node list source shared by `nearest` and `on-node`.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct NodesArg {
    /// Inline nodes, e.g. "0,0;10,5;-3,2"
    #[arg(long, allow_hyphen_values = true, value_parser = parse_point_list)]
    pub points: Option<PointList>,
    /// JSON file holding [[x, y], ...]
    #[arg(long)]
    pub points_file: Option<PathBuf>,
}

impl NodesArg {
    pub fn load(&self) -> Result<Vec<Point>> {
        match (&self.points, &self.points_file) {
            (Some(list), _) => Ok(list.0.clone()),
            (None, Some(path)) => read_points_file(path),
            (None, None) => bail!("either --points or --points-file is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_points_with_spaces_and_signs() {
        assert_eq!(parse_point("1.5,-2").unwrap(), Point::new(1.5, -2.0));
        assert_eq!(parse_point(" -3 , 4e1 ").unwrap(), Point::new(-3.0, 40.0));
        assert!(parse_point("1;2").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn parses_point_lists() {
        let list = parse_point_list("0,0; 1,1;;2,-2;").unwrap();
        assert_eq!(
            list.0,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, -2.0)]
        );
        assert!(parse_point_list("").unwrap().0.is_empty());
        assert!(parse_point_list("0,0;x").is_err());
    }

    #[test]
    fn reads_points_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nodes.json");
        fs::write(&path, "[[0, 0], [3.5, -1]]").unwrap();
        let pts = read_points_file(&path).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(3.5, -1.0)]);

        fs::write(&path, "{\"x\": 1}").unwrap();
        assert!(read_points_file(&path).is_err());
        assert!(read_points_file(&dir.path().join("missing.json")).is_err());
    }
}
