//! Arc interpolation: densify each fillet at a fixed angular step.
//!
//! For an arc of signed sweep Δ and length `r·|Δ|`, `k = floor(length · resolution)`
//! sub-intervals of `Δ / k` are used and the `k − 1` interior points emitted.
//! Endpoints are never duplicated. `resolution = 0` emits anchors only.
//! An arc needing more than [`MAX_ARC_SAMPLES`] sub-intervals is rejected.

use super::assemble::Skeleton;
use super::Segment;
use crate::error::SplineError;
use crate::geom2::{angle_about, point_on_circle, sweep, Point, Rotation};

/// Upper bound on sub-intervals per arc.
pub const MAX_ARC_SAMPLES: usize = 1 << 20;

/// Sampling of a single fillet arc.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSamples {
    /// Signed sweep: negative clockwise, positive counter-clockwise.
    pub angle_range: f64,
    pub arc_length: f64,
    /// Interior points only, in travel order.
    pub samples: Vec<Point>,
}

/// Sample the arc from `entry` to `exit` about `center`.
pub fn sample_arc(
    entry: Point,
    exit: Point,
    center: Point,
    rotation: Rotation,
    radius: f64,
    resolution: f64,
) -> Result<ArcSamples, SplineError> {
    let first = angle_about(center, entry);
    let second = angle_about(center, exit);
    let angle_range = rotation.signum() * sweep(rotation, first, second);
    let arc_length = radius * angle_range.abs();
    let count = (arc_length * resolution).floor();
    if !(count <= MAX_ARC_SAMPLES as f64) {
        return Err(SplineError::TooManySamples {
            arc_length,
            resolution,
            limit: MAX_ARC_SAMPLES,
        });
    }
    let samples = if count >= 2.0 {
        let interval = angle_range / count;
        (1..count as usize)
            .map(|k| point_on_circle(center, radius, first + interval * k as f64))
            .collect()
    } else {
        Vec::new()
    };
    tracing::debug!(angle_range, arc_length, samples = samples.len(), "arc");
    Ok(ArcSamples {
        angle_range,
        arc_length,
        samples,
    })
}

/// Expand a skeleton into the dense polyline, preserving travel order.
pub fn interpolate(
    sk: &Skeleton,
    radius: f64,
    resolution: f64,
) -> Result<Vec<Point>, SplineError> {
    let mut out = Vec::with_capacity(sk.anchors.len());
    let Some(&first) = sk.anchors.first() else {
        return Ok(out);
    };
    out.push(first);
    for (i, segment) in sk.segments.iter().enumerate() {
        let (entry, exit) = (sk.anchors[i], sk.anchors[i + 1]);
        if let Segment::Curve { center, rotation } = *segment {
            if resolution > 0.0 {
                out.extend(sample_arc(entry, exit, center, rotation, radius, resolution)?.samples);
            }
        }
        out.push(exit);
    }
    Ok(out)
}
