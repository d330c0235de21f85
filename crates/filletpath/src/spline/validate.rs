//! Validators: the generation precondition and the post-hoc tangency check.
//!
//! - `check_waypoints`: count, finiteness and minimum separation. Runs before
//!   any fillet is solved; failure aborts the request.
//! - `check_tangency`: advisory verification of a produced path. Failures are
//!   reported with the offending waypoint and the raw anchor polyline.

use super::{FilletPath, Segment};
use crate::error::SplineError;
use crate::geom2::{arc_tangent, cross, distance, sign, GeomCfg, Point};

/// Minimum-separation precondition over the whole waypoint list.
pub fn check_waypoints(waypoints: &[Point], turn_radius: f64) -> Result<(), SplineError> {
    if waypoints.len() < 2 {
        return Err(SplineError::TooFewWaypoints {
            count: waypoints.len(),
        });
    }
    if let Some(index) = waypoints
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(SplineError::NonFiniteWaypoint { index });
    }
    for (index, pair) in waypoints.windows(2).enumerate() {
        let d = distance(pair[0], pair[1]);
        if d < turn_radius {
            return Err(SplineError::WaypointsTooClose {
                index,
                distance: d,
                radius: turn_radius,
            });
        }
    }
    Ok(())
}

/// Which relation failed in a tangency check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TangencyCheck {
    /// Incoming segment not perpendicular to the radius at the waypoint.
    Entry,
    /// Outgoing segment not perpendicular to the radius at the exit point.
    Exit,
    /// Centre on the wrong side of travel for the recorded rotation.
    Rotation,
    /// Path does not account for the expected number of waypoints.
    WaypointCount,
}

/// Diagnostic payload of a failed tangency check.
#[derive(Clone, Debug, PartialEq)]
pub struct TangencyFailure {
    /// Original waypoint index (0 for a count mismatch).
    pub waypoint: usize,
    pub check: TangencyCheck,
    /// Squared hypotenuse, expected sign, or expected count.
    pub lhs: f64,
    /// Sum of squared legs, observed sign, or observed count.
    pub rhs: f64,
    /// Raw anchor polyline of the path under test.
    pub path: Vec<Point>,
}

/// Outcome of [`check_tangency`].
#[derive(Clone, Debug, PartialEq)]
pub struct TangencyReport {
    /// Number of fillet arcs verified.
    pub checked: usize,
    /// Interior waypoints passed without an arc (collinear or already
    /// tangent); there is no circle to verify at these.
    pub straight: usize,
    pub failure: Option<TangencyFailure>,
}

impl TangencyReport {
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// `|p - c|² ≈ |p - q|² + |q - c|²`, i.e. (p→q) ⟂ (q→c), relative to `max(1, |p - c|²)`.
fn right_angle_at(p: Point, q: Point, c: Point, eps: f64) -> (bool, f64, f64) {
    let hyp = (p - c).norm_squared();
    let legs = (p - q).norm_squared() + (q - c).norm_squared();
    ((hyp - legs).abs() <= eps * hyp.max(1.0), hyp, legs)
}

/// Verify every fillet of `path` is tangent on both sides, with the default tolerance.
pub fn check_tangency(path: &FilletPath, waypoint_count: usize) -> TangencyReport {
    check_tangency_with(path, waypoint_count, GeomCfg::default().eps_perp)
}

/// As [`check_tangency`] with an explicit relative tolerance on squared lengths.
pub fn check_tangency_with(path: &FilletPath, waypoint_count: usize, eps: f64) -> TangencyReport {
    let fail = |waypoint, check, lhs, rhs| TangencyReport {
        checked: 0,
        straight: 0,
        failure: Some(TangencyFailure {
            waypoint,
            check,
            lhs,
            rhs,
            path: path.anchors.clone(),
        }),
    };
    if path.waypoint_anchor.len() != waypoint_count {
        return fail(
            0,
            TangencyCheck::WaypointCount,
            waypoint_count as f64,
            path.waypoint_anchor.len() as f64,
        );
    }
    let anchors = &path.anchors;
    let mut checked = 0;
    let mut straight = 0;
    for w in 1..waypoint_count.saturating_sub(1) {
        let a = path.waypoint_anchor[w];
        let Some(Segment::Curve { center, rotation }) = path.segments.get(a) else {
            straight += 1;
            continue;
        };
        let (Some(&chord_start), Some(&entry), Some(&exit)) =
            (anchors.get(a.wrapping_sub(1)), anchors.get(a), anchors.get(a + 1))
        else {
            return fail(w, TangencyCheck::Entry, f64::NAN, f64::NAN);
        };
        // Arriving on another arc: stand in a point behind `entry` on its tangent.
        let prev = match a.checked_sub(1).and_then(|i| path.segments.get(i)) {
            Some(&Segment::Curve {
                center: c0,
                rotation: r0,
            }) => entry - arc_tangent(c0, entry, r0) * path.turn_radius,
            _ => chord_start,
        };
        let (ok, hyp, legs) = right_angle_at(prev, entry, *center, eps);
        if !ok {
            return fail(w, TangencyCheck::Entry, hyp, legs);
        }
        let side = sign(cross(entry - prev, *center - entry));
        if side != rotation.signum() {
            return fail(w, TangencyCheck::Rotation, rotation.signum(), side);
        }
        // An arc-to-arc junction is verified as the next fillet's entry.
        if let (Some(Segment::Straight), Some(&target)) =
            (path.segments.get(a + 1), anchors.get(a + 2))
        {
            let (ok, hyp, legs) = right_angle_at(target, exit, *center, eps);
            if !ok {
                return fail(w, TangencyCheck::Exit, hyp, legs);
            }
        }
        checked += 1;
    }
    TangencyReport {
        checked,
        straight,
        failure: None,
    }
}
