//! Request parsing and path output (CSV via polars, JSON via serde).

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use filletpath::{FilletPath, Point, Rotation, Segment, SplineCfg};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Generation request as read from disk. CSV inputs carry waypoints only.
#[derive(Debug, Default, Deserialize)]
pub struct Request {
    pub waypoints: Vec<[f64; 2]>,
    #[serde(default)]
    pub turn_radius: Option<f64>,
    #[serde(default)]
    pub resolution: Option<f64>,
    #[serde(default)]
    pub boundary: Vec<[f64; 2]>,
}

impl Request {
    pub fn waypoints(&self) -> Vec<Point> {
        self.waypoints.iter().map(|p| Point::new(p[0], p[1])).collect()
    }

    /// Command-line values win over file values; defaults fill the rest.
    pub fn to_cfg(&self, radius: Option<f64>, resolution: Option<f64>) -> SplineCfg {
        let base = SplineCfg::default();
        SplineCfg::new(
            radius.or(self.turn_radius).unwrap_or(base.turn_radius),
            resolution.or(self.resolution).unwrap_or(base.resolution),
        )
        .with_boundary(self.boundary.iter().map(|p| Point::new(p[0], p[1])).collect())
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// Read a request from `.csv` (columns `x`, `y`) or JSON.
pub fn read_request(path: &Path) -> Result<Request> {
    if is_csv(path) {
        return Ok(Request {
            waypoints: read_waypoints_csv(path)?,
            ..Request::default()
        });
    }
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Read waypoints from a CSV with `x` and `y` columns.
pub fn read_waypoints_csv(path: &Path) -> Result<Vec<[f64; 2]>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "waypoints_csv_shape");
    let column = |name: &str| -> Result<Vec<f64>> {
        let series = df
            .column(name)
            .with_context(|| format!("{}: missing column {name}", path.display()))?
            .cast(&DataType::Float64)?;
        let values: Result<Vec<f64>> = series
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.ok_or_else(|| anyhow!("{}: empty {name} at row {row}", path.display())))
            .collect();
        values
    };
    let xs = column("x")?;
    let ys = column("y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect())
}

/// Write the dense polyline as CSV (`x`, `y`).
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentDoc {
    Straight,
    Curve { center: [f64; 2], clockwise: bool },
}

/// Serializable view of a generated path.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathDoc {
    pub turn_radius: f64,
    pub length: f64,
    pub points: Vec<[f64; 2]>,
    pub anchors: Vec<[f64; 2]>,
    pub segments: Vec<SegmentDoc>,
}

impl From<&FilletPath> for PathDoc {
    fn from(path: &FilletPath) -> Self {
        let xy = |p: &Point| [p.x, p.y];
        Self {
            turn_radius: path.turn_radius,
            length: path.length(),
            points: path.points.iter().map(xy).collect(),
            anchors: path.anchors.iter().map(xy).collect(),
            segments: path
                .segments
                .iter()
                .map(|s| match *s {
                    Segment::Straight => SegmentDoc::Straight,
                    Segment::Curve { center, rotation } => SegmentDoc::Curve {
                        center: [center.x, center.y],
                        clockwise: rotation == Rotation::Clockwise,
                    },
                })
                .collect(),
        }
    }
}

/// Write the path: CSV points for `.csv`, the full `PathDoc` as JSON otherwise.
pub fn write_path(out: &Path, path: &FilletPath) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if is_csv(out) {
        write_points_csv(out, &path.points)
    } else {
        let doc = PathDoc::from(path);
        std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))
    }
}
