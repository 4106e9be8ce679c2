//! SE(2) poses and rectangular pose bounds.

use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::error::SpecError;

/// A 2D rigid-body pose: position plus orientation.
///
/// `theta` is in radians. Poses produced by sampling are normalized to
/// `(-π, π]`; poses built by hand are stored as given.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SE2Pose {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Orientation in radians.
    pub theta: f64,
}

impl SE2Pose {
    /// Create a pose from its components.
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Copy of this pose with `theta` wrapped into `(-π, π]`.
    pub fn normalized(self) -> Self {
        Self {
            theta: wrap_angle(self.theta),
            ..self
        }
    }
}

impl fmt::Display for SE2Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.theta)
    }
}

/// Wrap an angle into `(-π, π]`.
pub fn wrap_angle(theta: f64) -> f64 {
    if !theta.is_finite() {
        return theta;
    }
    let mut wrapped = theta.rem_euclid(TAU);
    // rem_euclid lands in [0, 2π), so -π maps to π.
    if wrapped > PI {
        wrapped -= TAU;
    }
    wrapped
}

/// Component-wise inclusive bounds on an [`SE2Pose`].
///
/// A degenerate axis (`lo == hi`) pins that component: the shelf `y` and
/// `theta`, or a test that reduces the bounds to a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseBounds {
    /// Lower corner.
    pub lo: SE2Pose,
    /// Upper corner.
    pub hi: SE2Pose,
}

impl PoseBounds {
    /// Create bounds from the two corner poses.
    pub const fn new(lo: SE2Pose, hi: SE2Pose) -> Self {
        Self { lo, hi }
    }

    /// Bounds that admit exactly one pose.
    pub const fn point(pose: SE2Pose) -> Self {
        Self { lo: pose, hi: pose }
    }

    /// Whether `pose` lies within the bounds on every component.
    pub fn contains(&self, pose: &SE2Pose) -> bool {
        (self.lo.x..=self.hi.x).contains(&pose.x)
            && (self.lo.y..=self.hi.y).contains(&pose.y)
            && (self.lo.theta..=self.hi.theta).contains(&pose.theta)
    }

    /// Check that every component is finite and ordered `lo <= hi`.
    ///
    /// `what` names the bounds in the returned error.
    pub fn validate(&self, what: &'static str) -> Result<(), SpecError> {
        let axes = [
            ("x", self.lo.x, self.hi.x),
            ("y", self.lo.y, self.hi.y),
            ("theta", self.lo.theta, self.hi.theta),
        ];
        for (axis, lo, hi) in axes {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(SpecError::InvalidBounds {
                    what,
                    reason: format!("{axis} range [{lo}, {hi}] is empty or not finite"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wrap_keeps_pi_and_maps_minus_pi() {
        assert_eq!(wrap_angle(PI), PI);
        assert_eq!(wrap_angle(-PI), PI);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn point_bounds_contain_only_their_pose() {
        let p = SE2Pose::new(1.0, 2.0, 0.5);
        let b = PoseBounds::point(p);
        assert!(b.contains(&p));
        assert!(!b.contains(&SE2Pose::new(1.0, 2.0, 0.6)));
        assert!(b.validate("point").is_ok());
    }

    #[test]
    fn inverted_bounds_fail_validation() {
        let b = PoseBounds::new(SE2Pose::new(1.0, 0.0, 0.0), SE2Pose::new(0.0, 1.0, 0.0));
        match b.validate("robot init") {
            Err(SpecError::InvalidBounds { what, reason }) => {
                assert_eq!(what, "robot init");
                assert!(reason.starts_with('x'));
            }
            other => panic!("expected InvalidBounds, got {other:?}"),
        }
    }

    #[test]
    fn nan_bounds_fail_validation() {
        let b = PoseBounds::new(SE2Pose::new(0.0, f64::NAN, 0.0), SE2Pose::new(1.0, 1.0, 0.0));
        assert!(b.validate("nan").is_err());
    }

    proptest! {
        #[test]
        fn wrapped_angle_in_half_open_interval(theta in -100.0f64..100.0) {
            let w = wrap_angle(theta);
            prop_assert!(w > -PI && w <= PI, "wrap({theta}) = {w}");
            // Same direction on the unit circle.
            prop_assert!((w.cos() - theta.cos()).abs() < 1e-9);
            prop_assert!((w.sin() - theta.sin()).abs() < 1e-9);
        }
    }
}
