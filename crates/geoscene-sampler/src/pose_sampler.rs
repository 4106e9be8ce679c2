//! Uniform sampling of scalars, rotations, and SE(2) poses.
//!
//! Every function takes the random source explicitly; there is no
//! hidden generator. Given the same seeded source, the same sequence of
//! calls produces bit-identical draws.

use geoscene_core::{PoseBounds, SE2Pose};
use rand::Rng;

/// Draw from `U(lo, hi)`, half-open like a numeric `uniform(lo, hi)`.
///
/// A degenerate range (`lo >= hi`) returns `lo` without consuming the
/// source, which is how pinned pose components (shelf `y`, unrotated
/// `theta`) stay fixed.
pub fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Draw a pose with independent uniform components inside `bounds`.
///
/// Components are drawn in the order x, y, theta; the orientation is
/// then wrapped into `(-π, π]`.
pub fn sample_pose<R: Rng + ?Sized>(bounds: &PoseBounds, rng: &mut R) -> SE2Pose {
    let x = sample_uniform(rng, bounds.lo.x, bounds.hi.x);
    let y = sample_uniform(rng, bounds.lo.y, bounds.hi.y);
    let theta = sample_uniform(rng, bounds.lo.theta, bounds.hi.theta);
    SE2Pose::new(x, y, theta).normalized()
}

/// Draw `count` independent rotations from `U(lo, hi)`.
pub fn sample_rotations<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64), count: usize) -> Vec<f64> {
    (0..count).map(|_| sample_uniform(rng, lo, hi)).collect()
}
