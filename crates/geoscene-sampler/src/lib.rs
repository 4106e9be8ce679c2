//! Constrained initial-state samplers for geoscene.
//!
//! Turns a declarative scene spec into a finished, collision-free
//! [`WorldState`](geoscene_core::WorldState). Fixed geometry is computed
//! in closed form by [`layout`]; random poses come from [`pose_sampler`];
//! [`StateBuilder`] assembles candidates on top of a shared base layer;
//! and the two samplers ([`ShelfStorageSampler`], [`MotionSampler`])
//! drive the whole process, rejection-sampling only where placement is
//! combinatorially constrained.
//!
//! All randomness is drawn from a caller-owned generator, so a seeded
//! generator reproduces a scene exactly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod goal;
pub mod layout;
pub mod metrics;
pub mod motion;
pub mod pose_sampler;
pub mod scene;
pub mod shelf;

pub use builder::{next_block_id, StateBuilder};
pub use config::{MotionSceneSpec, RobotSpec, ShelfSceneSpec};
pub use goal::{all_blocks_in_shelf, is_inside, robot_in_target_region};
pub use metrics::SamplingMetrics;
pub use motion::MotionSampler;
pub use pose_sampler::{sample_pose, sample_rotations, sample_uniform};
pub use scene::{Scene, SceneFamily, SceneSampler};
pub use shelf::ShelfStorageSampler;
