//! Errors surfaced by path generation.
//!
//! Every variant carries the raw values that produced it so callers can log
//! the failing request verbatim. `SplineError::kind` groups variants into
//! input validation, geometric degeneracy and numerical invariant failures.

use std::fmt;

use crate::geom2::Point;

/// Inputs of a single fillet solve: the chained start point, the waypoint the
/// circle is tangent at, the waypoint after it, and the turn radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilletInputs {
    /// Index of `current` in the waypoint sequence.
    pub waypoint: usize,
    pub previous: Point,
    pub current: Point,
    pub next: Point,
    pub radius: f64,
}

/// Coarse classification of a [`SplineError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected before any computation (bad counts, radius, spacing, indices).
    InputValidation,
    /// The geometry admits no fillet (coincident points, unreachable tangent).
    GeometricDegeneracy,
    /// An internal invariant failed; indicates a bug, never retried.
    NumericalInvariant,
}

/// Errors surfaced by the fillet engine.
#[derive(Clone, Debug, PartialEq)]
pub enum SplineError {
    /// A path needs at least two waypoints.
    TooFewWaypoints { count: usize },
    /// Turn radius must be finite and strictly positive.
    InvalidRadius { radius: f64 },
    /// Resolution must be finite and non-negative.
    InvalidResolution { resolution: f64 },
    /// An arc would need more than `limit` samples at this resolution.
    TooManySamples {
        arc_length: f64,
        resolution: f64,
        limit: usize,
    },
    /// A waypoint has a NaN or infinite coordinate.
    NonFiniteWaypoint { index: usize },
    /// Waypoints `index` and `index + 1` are closer than the turn radius.
    WaypointsTooClose {
        index: usize,
        distance: f64,
        radius: f64,
    },
    /// Waypoint removal referenced a position past the end of the list.
    IndexOutOfRange { index: usize, len: usize },
    /// The chained start coincides with the waypoint, so no heading exists.
    ZeroLengthHeading { inputs: FilletInputs },
    /// The next waypoint lies strictly inside the fillet circle; no tangent exists.
    NextInsideCircle {
        inputs: FilletInputs,
        center: Point,
        distance: f64,
    },
    /// Reflection line through the centre and the next waypoint is degenerate.
    DegenerateLine { inputs: FilletInputs, center: Point },
    /// Neither tangent candidate is reachable along the travel direction.
    NoExitFound {
        inputs: FilletInputs,
        current_angle: f64,
        exit_angle: f64,
        mirror_angle: f64,
    },
    /// An angle failed to normalize into (−π, π].
    AngleOutOfRange {
        inputs: FilletInputs,
        stage: &'static str,
        angle: f64,
    },
}

impl SplineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplineError::TooFewWaypoints { .. }
            | SplineError::InvalidRadius { .. }
            | SplineError::InvalidResolution { .. }
            | SplineError::TooManySamples { .. }
            | SplineError::NonFiniteWaypoint { .. }
            | SplineError::WaypointsTooClose { .. }
            | SplineError::IndexOutOfRange { .. } => ErrorKind::InputValidation,
            SplineError::ZeroLengthHeading { .. }
            | SplineError::NextInsideCircle { .. }
            | SplineError::DegenerateLine { .. }
            | SplineError::NoExitFound { .. } => ErrorKind::GeometricDegeneracy,
            SplineError::AngleOutOfRange { .. } => ErrorKind::NumericalInvariant,
        }
    }

    /// Fillet inputs attached to the error, if it arose inside a fillet solve.
    pub fn inputs(&self) -> Option<&FilletInputs> {
        match self {
            SplineError::ZeroLengthHeading { inputs }
            | SplineError::NextInsideCircle { inputs, .. }
            | SplineError::DegenerateLine { inputs, .. }
            | SplineError::NoExitFound { inputs, .. }
            | SplineError::AngleOutOfRange { inputs, .. } => Some(inputs),
            _ => None,
        }
    }
}

struct P(Point);

impl fmt::Display for P {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl fmt::Display for FilletInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "waypoint {} (previous={}, current={}, next={}, radius={})",
            self.waypoint,
            P(self.previous),
            P(self.current),
            P(self.next),
            self.radius
        )
    }
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplineError::TooFewWaypoints { count } => {
                write!(f, "need at least 2 waypoints, got {count}")
            }
            SplineError::InvalidRadius { radius } => {
                write!(f, "turn radius must be finite and > 0, got {radius}")
            }
            SplineError::InvalidResolution { resolution } => {
                write!(f, "resolution must be finite and >= 0, got {resolution}")
            }
            SplineError::TooManySamples {
                arc_length,
                resolution,
                limit,
            } => write!(
                f,
                "arc of length {arc_length} at resolution {resolution} exceeds {limit} samples"
            ),
            SplineError::NonFiniteWaypoint { index } => {
                write!(f, "waypoint {index} has a non-finite coordinate")
            }
            SplineError::WaypointsTooClose {
                index,
                distance,
                radius,
            } => write!(
                f,
                "waypoints {} and {} are {} apart, less than the turn radius {}",
                index,
                index + 1,
                distance,
                radius
            ),
            SplineError::IndexOutOfRange { index, len } => {
                write!(f, "waypoint index {index} out of range for {len} waypoints")
            }
            SplineError::ZeroLengthHeading { inputs } => {
                write!(f, "no incoming heading at {inputs}")
            }
            SplineError::NextInsideCircle {
                inputs,
                center,
                distance,
            } => write!(
                f,
                "next waypoint is {} from centre {}, inside the fillet circle at {}",
                distance,
                P(*center),
                inputs
            ),
            SplineError::DegenerateLine { inputs, center } => write!(
                f,
                "reflection line through centre {} and next waypoint is degenerate at {}",
                P(*center),
                inputs
            ),
            SplineError::NoExitFound {
                inputs,
                current_angle,
                exit_angle,
                mirror_angle,
            } => write!(
                f,
                "no exit point reachable from angle {current_angle} \
                 (candidates {exit_angle}, {mirror_angle}) at {inputs}"
            ),
            SplineError::AngleOutOfRange {
                inputs,
                stage,
                angle,
            } => write!(
                f,
                "{stage} angle {angle} outside (-pi, pi] at {inputs}"
            ),
        }
    }
}

impl std::error::Error for SplineError {}
