//! Request configuration for one path generation.

use crate::error::SplineError;
use crate::geom2::{GeomCfg, Point};

/// Immutable per-request configuration.
///
/// `boundary` is carried for callers that render or post-check it; the
/// engine does not enforce it.
#[derive(Clone, Debug, PartialEq)]
pub struct SplineCfg {
    /// Minimum turn radius (> 0).
    pub turn_radius: f64,
    /// Samples per unit arc length (>= 0). Zero disables interpolation.
    pub resolution: f64,
    pub boundary: Vec<Point>,
    pub geom: GeomCfg,
}

impl Default for SplineCfg {
    fn default() -> Self {
        Self {
            turn_radius: 0.8,
            resolution: 3.0,
            boundary: Vec::new(),
            geom: GeomCfg::default(),
        }
    }
}

impl SplineCfg {
    pub fn new(turn_radius: f64, resolution: f64) -> Self {
        Self {
            turn_radius,
            resolution,
            ..Self::default()
        }
    }

    pub fn with_boundary(mut self, boundary: Vec<Point>) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_turn_radius(mut self, turn_radius: f64) -> Self {
        self.turn_radius = turn_radius;
        self
    }

    /// Reject non-positive or non-finite radius and negative or non-finite resolution.
    pub fn validate(&self) -> Result<(), SplineError> {
        if !(self.turn_radius.is_finite() && self.turn_radius > 0.0) {
            return Err(SplineError::InvalidRadius {
                radius: self.turn_radius,
            });
        }
        if !(self.resolution.is_finite() && self.resolution >= 0.0) {
            return Err(SplineError::InvalidResolution {
                resolution: self.resolution,
            });
        }
        Ok(())
    }
}
