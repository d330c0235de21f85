//! Fillet path generation: waypoints + turn radius → straight/arc polyline.
//!
//! Purpose
//! - Turn an ordered waypoint list into a continuous path whose turns are
//!   circular arcs of exactly the configured radius, sampled at a requested
//!   density.
//!
//! Why this design
//! - One pure entry point (`generate`) over an immutable `SplineCfg`; nothing
//!   is cached between calls, so identical requests give identical output.
//! - The pipeline is split where its products are useful on their own:
//!   `assemble` (anchors + descriptors), `interpolate` (dense polyline),
//!   `check_tangency` (advisory verification).
//!
//! References
//! - Code cross-refs: `crate::geom2::{solve_tangent_circle, classify_rotation, choose_exit}`

pub mod assemble;
pub mod config;
pub mod interp;
pub mod validate;

pub use assemble::{assemble, solve_fillet, Fillet, Skeleton};
pub use config::SplineCfg;
pub use interp::{interpolate, sample_arc, ArcSamples, MAX_ARC_SAMPLES};
pub use validate::{
    check_tangency, check_tangency_with, check_waypoints, TangencyCheck, TangencyFailure,
    TangencyReport,
};

use crate::error::SplineError;
use crate::geom2::{angle_about, distance, sweep, Point, Rotation};

/// Transition between two consecutive anchors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Straight,
    Curve { center: Point, rotation: Rotation },
}

/// Generated path.
///
/// `segments[i]` describes the transition `anchors[i] → anchors[i + 1]`;
/// `points` is the anchor polyline with arc samples inserted between curve
/// endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct FilletPath {
    pub points: Vec<Point>,
    pub anchors: Vec<Point>,
    pub segments: Vec<Segment>,
    /// Anchor index of each original waypoint.
    pub waypoint_anchor: Vec<usize>,
    pub turn_radius: f64,
}

impl FilletPath {
    /// Curve descriptors with the anchor index of their entry point.
    pub fn curves(&self) -> impl Iterator<Item = (usize, Point, Rotation)> + '_ {
        self.segments.iter().enumerate().filter_map(|(i, s)| match *s {
            Segment::Curve { center, rotation } => Some((i, center, rotation)),
            Segment::Straight => None,
        })
    }

    /// Exact length: straight segments plus `r·|sweep|` per arc.
    pub fn length(&self) -> f64 {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let (a, b) = (self.anchors[i], self.anchors[i + 1]);
                match *s {
                    Segment::Straight => distance(a, b),
                    Segment::Curve { center, rotation } => {
                        self.turn_radius
                            * sweep(rotation, angle_about(center, a), angle_about(center, b))
                    }
                }
            })
            .sum()
    }
}

/// Generate the fillet path through `waypoints`.
///
/// Validates the configuration and the minimum waypoint separation first;
/// nothing is computed for a rejected request.
pub fn generate(waypoints: &[Point], cfg: &SplineCfg) -> Result<FilletPath, SplineError> {
    if !cfg.boundary.is_empty() {
        tracing::warn!(
            boundary_points = cfg.boundary.len(),
            "boundary accepted but not enforced"
        );
    }
    let sk = assemble(waypoints, cfg)?;
    let points = interpolate(&sk, cfg.turn_radius, cfg.resolution)?;
    tracing::debug!(
        waypoints = waypoints.len(),
        anchors = sk.anchors.len(),
        points = points.len(),
        "path generated"
    );
    Ok(FilletPath {
        points,
        anchors: sk.anchors,
        segments: sk.segments,
        waypoint_anchor: sk.waypoint_anchor,
        turn_radius: cfg.turn_radius,
    })
}

#[cfg(test)]
mod tests;
