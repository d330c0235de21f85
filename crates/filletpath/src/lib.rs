//! Fillet-based path smoothing.
//!
//! Converts an ordered list of waypoints and a minimum turn radius into a
//! continuous path: straight segments joined by circular arcs of exactly that
//! radius, sampled into a dense polyline.
//!
//! Layout
//! - `geom2`: planar primitives and the fillet solvers.
//! - `spline`: assembler, interpolator, validators and the `generate` entry point.
//! - `waypoints`: editable waypoint list feeding `generate`.
//! - `rand`: reproducible random waypoint walks.

pub mod api;
pub mod error;
pub mod geom2;
pub mod rand;
pub mod spline;
pub mod waypoints;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ErrorKind, FilletInputs, SplineError};
pub use geom2::{GeomCfg, Point, Rotation};
pub use spline::{check_tangency, generate, FilletPath, Segment, SplineCfg, TangencyReport};
pub use waypoints::WaypointList;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{ErrorKind, SplineError};
    pub use crate::geom2::{GeomCfg, Point, Rotation};
    pub use crate::rand::{draw_waypoints, ReplayToken, WalkCfg};
    pub use crate::spline::{
        check_tangency, generate, FilletPath, Segment, SplineCfg, TangencyReport,
    };
    pub use crate::waypoints::WaypointList;
    pub use nalgebra::Vector2 as Vec2;
}
