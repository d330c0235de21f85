//! Path assembler: alternate straight segments and fillets along the waypoints.
//!
//! State machine
//! - At waypoint i < N−2: straight to waypoint i+1, then solve the fillet on
//!   (start, waypoint i+1, waypoint i+2). The fillet's exit point becomes the
//!   start of the next straight.
//! - At waypoint N−2: straight from the last exit (or waypoint 0) to waypoint N−1.
//!
//! Zero-length transitions (an already-tangent waypoint, or an exit landing on
//! the following waypoint) are collapsed before interpolation. When an exit
//! lands on an interior waypoint, the next fillet inherits the arc's heading,
//! so two curves can meet without a straight between them.

use super::config::SplineCfg;
use super::validate::check_waypoints;
use super::Segment;
use crate::error::{FilletInputs, SplineError};
use crate::geom2::{
    angle_about, arc_tangent, choose_exit, classify_rotation, distance, is_normalized,
    mirror_across_line, point_on_circle, solve_tangent_circle, vertex_angle_deg, Candidate,
    ExitPick, GeomCfg, Point, Rotation,
};

/// A solved fillet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fillet {
    pub center: Point,
    pub rotation: Rotation,
    /// Where the vehicle leaves the circle toward `next`.
    pub exit: Point,
    /// Unsigned sweep from `current` to `exit`, in [0, 2π).
    pub sweep: f64,
    /// `current` was already a tangent point; no arc is driven.
    pub tangent: bool,
}

/// Solve one fillet: tangent circle, rotation sense, then the first reachable exit.
pub fn solve_fillet(inputs: &FilletInputs, geom: &GeomCfg) -> Result<Fillet, SplineError> {
    let r = inputs.radius;
    let circle = solve_tangent_circle(inputs, geom.eps_dup)?;
    let center = circle.center;
    let rotation = classify_rotation(inputs.previous, inputs.current, center, geom.eps_heading);

    let principal = point_on_circle(center, r, circle.exit_angle);
    let mirrored = mirror_across_line(center, inputs.next, principal).ok_or(
        SplineError::DegenerateLine {
            inputs: *inputs,
            center,
        },
    )?;
    let mirror_angle = angle_about(center, mirrored);
    let current_angle = angle_about(center, inputs.current);
    for (stage, angle) in [("mirror exit", mirror_angle), ("current", current_angle)] {
        if !is_normalized(angle) {
            return Err(SplineError::AngleOutOfRange {
                inputs: *inputs,
                stage,
                angle,
            });
        }
    }

    let pick = choose_exit(
        current_angle,
        circle.exit_angle,
        mirror_angle,
        rotation,
        geom.tangent_decimals,
    )
    .ok_or(SplineError::NoExitFound {
        inputs: *inputs,
        current_angle,
        exit_angle: circle.exit_angle,
        mirror_angle,
    })?;
    let fillet = match pick {
        ExitPick::Tangent(_) => Fillet {
            center,
            rotation,
            exit: inputs.current,
            sweep: 0.0,
            tangent: true,
        },
        ExitPick::Arc { candidate, sweep } => {
            let angle = match candidate {
                Candidate::Principal => circle.exit_angle,
                Candidate::Mirror => mirror_angle,
            };
            Fillet {
                center,
                rotation,
                exit: point_on_circle(center, r, angle),
                sweep,
                tangent: false,
            }
        }
    };
    tracing::debug!(
        waypoint = inputs.waypoint,
        vertex_angle_deg = vertex_angle_deg(inputs.previous, inputs.current, inputs.next),
        center_x = center.x,
        center_y = center.y,
        ?rotation,
        exit_x = fillet.exit.x,
        exit_y = fillet.exit.y,
        sweep = fillet.sweep,
        tangent = fillet.tangent,
        "fillet"
    );
    Ok(fillet)
}

/// Pre-interpolation path: anchor points joined by segment descriptors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Skeleton {
    /// start, waypoint, exit, waypoint, exit, ..., last waypoint.
    pub anchors: Vec<Point>,
    /// `segments[i]` joins `anchors[i]` to `anchors[i + 1]`.
    pub segments: Vec<Segment>,
    /// Anchor index of each original waypoint.
    pub waypoint_anchor: Vec<usize>,
}

/// Run the state machine over `waypoints` and collapse zero-length transitions.
pub fn assemble(waypoints: &[Point], cfg: &SplineCfg) -> Result<Skeleton, SplineError> {
    cfg.validate()?;
    check_waypoints(waypoints, cfg.turn_radius)?;

    let n = waypoints.len();
    let mut sk = Skeleton {
        anchors: Vec::with_capacity(2 * n - 2),
        segments: Vec::with_capacity(2 * n - 3),
        waypoint_anchor: Vec::with_capacity(n),
    };
    sk.anchors.push(waypoints[0]);
    sk.waypoint_anchor.push(0);

    let mut start = waypoints[0];
    for (i, pair) in waypoints[1..].windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);
        sk.segments.push(Segment::Straight);
        sk.anchors.push(current);
        sk.waypoint_anchor.push(sk.anchors.len() - 1);

        let inputs = FilletInputs {
            waypoint: i + 1,
            previous: start,
            current,
            next,
            radius: cfg.turn_radius,
        };
        let fillet = solve_fillet(&inputs, &cfg.geom)?;
        sk.segments.push(if fillet.tangent {
            Segment::Straight
        } else {
            Segment::Curve {
                center: fillet.center,
                rotation: fillet.rotation,
            }
        });
        sk.anchors.push(fillet.exit);
        // An exit landing on the next waypoint leaves no straight to take a
        // heading from; continue along the arc's tangent instead.
        start = if !fillet.tangent && distance(fillet.exit, next) <= cfg.geom.eps_dup {
            fillet.exit - arc_tangent(fillet.center, fillet.exit, fillet.rotation) * cfg.turn_radius
        } else {
            fillet.exit
        };
    }
    sk.segments.push(Segment::Straight);
    sk.anchors.push(waypoints[n - 1]);
    sk.waypoint_anchor.push(sk.anchors.len() - 1);

    collapse_duplicates(&mut sk, cfg.geom.eps_dup);
    Ok(sk)
}

/// Drop zero-length transitions. The final anchor keeps the exact last waypoint.
fn collapse_duplicates(sk: &mut Skeleton, eps: f64) {
    let mut i = 0;
    while i < sk.segments.len() {
        if distance(sk.anchors[i], sk.anchors[i + 1]) > eps {
            i += 1;
            continue;
        }
        if i + 1 == sk.anchors.len() - 1 {
            sk.anchors[i] = sk.anchors[i + 1];
        }
        sk.anchors.remove(i + 1);
        sk.segments.remove(i);
        for a in sk.waypoint_anchor.iter_mut() {
            if *a > i {
                *a -= 1;
            }
        }
    }
}
