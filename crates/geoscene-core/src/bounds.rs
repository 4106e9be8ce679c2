//! World extents and robot action limits.

use crate::error::SpecError;

/// Axis-aligned world extents. `(0, 0)` is conventionally bottom-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    /// Left edge.
    pub min_x: f64,
    /// Right edge.
    pub max_x: f64,
    /// Floor.
    pub min_y: f64,
    /// Ceiling.
    pub max_y: f64,
}

impl WorldBounds {
    /// Create bounds from their four edges.
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether `(x, y)` lies strictly inside the bounds.
    ///
    /// Touching a boundary counts as outside.
    pub fn strictly_contains(&self, x: f64, y: f64) -> bool {
        self.min_x < x && x < self.max_x && self.min_y < y && y < self.max_y
    }

    /// Check that the bounds are finite with positive area.
    pub fn validate(&self) -> Result<(), SpecError> {
        let edges = [self.min_x, self.max_x, self.min_y, self.max_y];
        if edges.iter().any(|v| !v.is_finite()) || self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(SpecError::InvalidBounds {
                what: "world",
                reason: format!(
                    "x [{}, {}] and y [{}, {}] must be finite with positive extent",
                    self.min_x, self.max_x, self.min_y, self.max_y
                ),
            });
        }
        Ok(())
    }
}

/// Per-step action limits of the robot.
///
/// Only the translation limits shape the scene (they size the boundary
/// walls); the remaining limits are carried for consumers that build the
/// action space from the same configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionLimits {
    /// Most negative x step.
    pub min_dx: f64,
    /// Most positive x step.
    pub max_dx: f64,
    /// Most negative y step.
    pub min_dy: f64,
    /// Most positive y step.
    pub max_dy: f64,
    /// Most negative rotation step.
    pub min_dtheta: f64,
    /// Most positive rotation step.
    pub max_dtheta: f64,
    /// Most negative arm extension step.
    pub min_darm: f64,
    /// Most positive arm extension step.
    pub max_darm: f64,
    /// Vacuum lower limit.
    pub min_vac: f64,
    /// Vacuum upper limit.
    pub max_vac: f64,
}

impl Default for ActionLimits {
    fn default() -> Self {
        Self {
            min_dx: -5e-2,
            max_dx: 5e-2,
            min_dy: -5e-2,
            max_dy: 5e-2,
            min_dtheta: -std::f64::consts::PI / 16.0,
            max_dtheta: std::f64::consts::PI / 16.0,
            min_darm: -1e-1,
            max_darm: 1e-1,
            min_vac: 0.0,
            max_vac: 1.0,
        }
    }
}

impl ActionLimits {
    /// Check that every limit pair is finite and ordered.
    pub fn validate(&self) -> Result<(), SpecError> {
        let pairs = [
            ("dx", self.min_dx, self.max_dx),
            ("dy", self.min_dy, self.max_dy),
            ("dtheta", self.min_dtheta, self.max_dtheta),
            ("darm", self.min_darm, self.max_darm),
            ("vac", self.min_vac, self.max_vac),
        ];
        for (name, lo, hi) in pairs {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(SpecError::InvalidParameter {
                    name: "action_limits",
                    reason: format!("{name} range [{lo}, {hi}] is empty or not finite"),
                });
            }
        }
        Ok(())
    }
}
