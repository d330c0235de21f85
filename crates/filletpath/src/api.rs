//! Curated surface for callers that want every stage of the pipeline.
//!
//! `generate` is enough for most uses; these re-exports expose the individual
//! stages (fillet solve, assembly, interpolation, validation) for plotting
//! and diagnostics.

// Primitives
pub use crate::geom2::{
    angle_about, ccw_sweep, distance, mirror_across_line, normalize_angle, point_on_circle, sign,
    vertex_angle_deg,
};
// Fillet solvers
pub use crate::geom2::{
    choose_exit, classify_rotation, solve_tangent_circle, Candidate, ExitPick, TangentCircle,
};
// Pipeline stages
pub use crate::spline::{
    assemble, check_tangency_with, check_waypoints, interpolate, sample_arc, solve_fillet,
    ArcSamples, Fillet, Skeleton, TangencyCheck, TangencyFailure, MAX_ARC_SAMPLES,
};
