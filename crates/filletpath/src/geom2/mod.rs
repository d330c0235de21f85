//! Planar geometry for fillet construction.
//!
//! Purpose
//! - Provide the primitives (distance, vertex angle, reflection, angle
//!   normalization, sweeps) and the three fillet solvers (tangent circle,
//!   rotation sense, exit choice) as small pure functions.
//! - Keep every tolerance explicit via `GeomCfg`.
//!
//! Why this design
//! - The exit choice is a single sweep-distance comparison: sweeps are always
//!   measured in the travel direction and wrapped into [0, 2π), so no sign
//!   case analysis over angle quadrants is needed.
//!
//! References
//! - Code cross-refs: `Point`, `Rotation`, `GeomCfg`, `crate::spline`

mod solvers;
mod types;
mod util;

pub use solvers::{
    choose_exit, classify_rotation, solve_tangent_circle, sweep, Candidate, ExitPick,
    TangentCircle,
};
pub use types::{GeomCfg, Point, Rotation};
pub use util::{
    angle_about, arc_tangent, ccw_sweep, cross, distance, heading, is_normalized,
    mirror_across_line, normalize_angle, point_on_circle, round_to, sign, vertex_angle_deg,
};
