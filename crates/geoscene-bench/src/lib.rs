//! Benchmark profiles for the geoscene scene generator.
//!
//! Provides pre-built scene specs for benchmarking:
//!
//! - [`reference_shelf`]: the default shelf-storage scene
//! - [`crowded_shelf`]: a smaller floor area so rejection sampling works harder
//! - [`reference_motion`]: the default narrow-passage scene

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use geoscene_core::{PoseBounds, SE2Pose};
use geoscene_sampler::{MotionSceneSpec, ShelfSceneSpec};

/// Default shelf-storage spec.
pub fn reference_shelf() -> ShelfSceneSpec {
    ShelfSceneSpec::default()
}

/// Shelf-storage spec whose outside blocks share a 1.5 × 0.6 patch of
/// floor, so most candidates are rejected once a few blocks are placed.
pub fn crowded_shelf() -> ShelfSceneSpec {
    let spec = ShelfSceneSpec::default();
    let lo = SE2Pose::new(1.0, 0.3, -std::f64::consts::PI);
    let hi = SE2Pose::new(2.5, 0.9, std::f64::consts::PI);
    let robot = PoseBounds::new(
        SE2Pose::new(3.5, 1.2, -std::f64::consts::PI),
        SE2Pose::new(4.0, 1.8, std::f64::consts::PI),
    );
    spec.with_out_of_shelf_pose_bounds(PoseBounds::new(lo, hi))
        .with_robot_init_pose_bounds(robot)
}

/// Default narrow-passage spec.
pub fn reference_motion() -> MotionSceneSpec {
    MotionSceneSpec::default()
}
