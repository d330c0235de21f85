//! Fillet solvers: tangent circle, rotation sense, exit-point choice.
//!
//! - `solve_tangent_circle`: centre of the circle tangent to the incoming
//!   segment at `current`, plus the principal tangent angle toward `next`.
//! - `classify_rotation`: clockwise iff the incoming heading matches the
//!   clockwise tangent at `current`.
//! - `choose_exit`: of two tangent candidates, the one reached first when
//!   sweeping from the current angle in the travel direction.
//!
//! References
//! - Code cross-refs: `util::{normalize_angle, ccw_sweep, mirror_across_line}`,
//!   `crate::spline::assemble::solve_fillet`

use std::f64::consts::{FRAC_PI_2, TAU};

use super::types::{Point, Rotation};
use super::util::{
    angle_about, ccw_sweep, distance, heading, is_normalized, normalize_angle, round_to,
};
use crate::error::{FilletInputs, SplineError};

/// Tangent circle at `current` and the principal exit angle toward `next`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentCircle {
    /// Chosen centre (the candidate closer to `next`).
    pub center: Point,
    /// Both candidates, left of the heading first.
    pub candidates: [Point; 2],
    /// Principal tangent angle about `center`, in (−π, π].
    pub exit_angle: f64,
    /// Distance from `center` to `next` (>= radius).
    pub reach: f64,
}

/// Solve the tangent circle for one fillet.
///
/// Candidates sit at distance `radius` from `current` on either side of the
/// incoming heading; the one closer to `next` wins, and an exact tie keeps the
/// left candidate. The exit angle is `atan2(next - center) + π/2 - asin(r/d)`,
/// i.e. the tangent point on the counter-clockwise side of the centre→next ray.
/// Its reflection across that ray is the second candidate (see `choose_exit`).
///
/// A `next` that falls short of the circle by at most `eps · max(1, r)` is
/// treated as lying on it, so its tangent point is `next` itself.
pub fn solve_tangent_circle(inputs: &FilletInputs, eps: f64) -> Result<TangentCircle, SplineError> {
    let r = inputs.radius;
    let incoming = inputs.current - inputs.previous;
    let len = incoming.norm();
    if !(len > 0.0 && len.is_finite()) {
        return Err(SplineError::ZeroLengthHeading { inputs: *inputs });
    }
    // Left normal of the heading.
    let normal = Point::new(-incoming.y, incoming.x) / len;
    let left = inputs.current + normal * r;
    let right = inputs.current - normal * r;
    let center = if distance(left, inputs.next) <= distance(right, inputs.next) {
        left
    } else {
        right
    };
    tracing::trace!(
        waypoint = inputs.waypoint,
        left_x = left.x,
        left_y = left.y,
        right_x = right.x,
        right_y = right.y,
        "fillet centre candidates"
    );

    let mut reach = distance(center, inputs.next);
    if reach < r && r - reach <= eps * r.max(1.0) {
        reach = r;
    }
    if !(reach >= r) {
        return Err(SplineError::NextInsideCircle {
            inputs: *inputs,
            center,
            distance: reach,
        });
    }
    let bearing = angle_about(center, inputs.next);
    let exit_angle = normalize_angle(bearing + FRAC_PI_2 - (r / reach).asin());
    if !is_normalized(exit_angle) {
        return Err(SplineError::AngleOutOfRange {
            inputs: *inputs,
            stage: "tangent exit",
            angle: exit_angle,
        });
    }
    Ok(TangentCircle {
        center,
        candidates: [left, right],
        exit_angle,
        reach,
    })
}

/// Sense of travel around `center` for a vehicle arriving at `current` from `previous`.
///
/// The clockwise tangent at `current` is the radius direction rotated by −90°.
/// Agreement with the heading within `eps` (radians) means clockwise.
pub fn classify_rotation(previous: Point, current: Point, center: Point, eps: f64) -> Rotation {
    let cw_tangent = angle_about(center, current) - FRAC_PI_2;
    let travel = heading(previous, current);
    if normalize_angle(cw_tangent - travel).abs() <= eps {
        Rotation::Clockwise
    } else {
        Rotation::CounterClockwise
    }
}

/// Non-negative sweep from `from` to `to` in the given sense, in [0, 2π).
#[inline]
pub fn sweep(rotation: Rotation, from: f64, to: f64) -> f64 {
    match rotation {
        Rotation::CounterClockwise => ccw_sweep(from, to),
        Rotation::Clockwise => ccw_sweep(to, from),
    }
}

/// Which tangent candidate was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Candidate {
    Principal,
    Mirror,
}

/// Outcome of the exit-point choice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExitPick {
    /// The current point already is a tangent point: zero-length transition.
    Tangent(Candidate),
    /// Travel `sweep` radians (in [0, 2π)) to reach the candidate.
    Arc { candidate: Candidate, sweep: f64 },
}

impl ExitPick {
    pub fn candidate(self) -> Candidate {
        match self {
            ExitPick::Tangent(c) => c,
            ExitPick::Arc { candidate, .. } => candidate,
        }
    }
}

/// Pick the tangent candidate reached first from `current_angle` in `rotation`.
///
/// A candidate whose angular gap to `current_angle` rounds to zero at
/// `decimals` places is returned as [`ExitPick::Tangent`], principal first.
/// Equal sweeps keep the principal candidate. Returns `None` when no sweep is
/// finite (NaN inputs).
pub fn choose_exit(
    current_angle: f64,
    exit_angle: f64,
    mirror_angle: f64,
    rotation: Rotation,
    decimals: i32,
) -> Option<ExitPick> {
    let candidates = [
        (Candidate::Principal, exit_angle),
        (Candidate::Mirror, mirror_angle),
    ];
    for (candidate, angle) in candidates {
        let s = ccw_sweep(current_angle, angle);
        let gap = s.min(TAU - s);
        if round_to(gap, decimals) == 0.0 {
            return Some(ExitPick::Tangent(candidate));
        }
    }
    let mut best: Option<(Candidate, f64)> = None;
    for (candidate, angle) in candidates {
        let s = sweep(rotation, current_angle, angle);
        if !s.is_finite() {
            continue;
        }
        match best {
            Some((_, b)) if b <= s => {}
            _ => best = Some((candidate, s)),
        }
    }
    best.map(|(candidate, sweep)| ExitPick::Arc { candidate, sweep })
}
