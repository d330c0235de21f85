//! Basic planar types and tolerances used by the fillet solvers.
//!
//! - `Point`: a planar position (nalgebra column vector, `Copy`).
//! - `Rotation`: sense of travel around a fillet circle.
//! - `GeomCfg`: centralizes epsilons for heading agreement, tangency, dedup
//!   and the perpendicularity check.
//!
//! References
//! - Code cross-refs: `solvers::{solve_tangent_circle, classify_rotation, choose_exit}`

use nalgebra::Vector2;

/// Planar point (x, y). Waypoints and sampled path points share this type.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Max angular disagreement (rad) between heading and clockwise tangent.
    pub eps_heading: f64,
    /// Decimal places used when comparing the current angle to a tangent candidate.
    pub tangent_decimals: i32,
    /// Points closer than this are treated as coincident.
    pub eps_dup: f64,
    /// Relative tolerance of the Pythagorean perpendicularity check.
    pub eps_perp: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_heading: 1e-5,
            tangent_decimals: 8,
            eps_dup: 1e-9,
            eps_perp: 1e-4,
        }
    }
}

/// Sense of travel around a fillet circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Sign of a sweep in this sense: clockwise is negative.
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            Rotation::Clockwise => -1.0,
            Rotation::CounterClockwise => 1.0,
        }
    }

    #[inline]
    pub fn is_clockwise(self) -> bool {
        matches!(self, Rotation::Clockwise)
    }
}
