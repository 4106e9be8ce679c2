//! geoscene: constrained procedural scene generation for 2D robot
//! manipulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all geoscene sub-crates. For most users, adding `geoscene` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use geoscene::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let sampler = ShelfStorageSampler::new(ShelfSceneSpec::default(), 3).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(0);
//! let scene = sampler.sample(&mut rng).unwrap();
//!
//! assert_eq!(scene.state.count_kind(ObjectKind::TargetBlock), 3);
//! assert!(GeometricOracle::new().colliding_pairs(&scene.state).is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `geoscene-core` | Identities, attribute records, poses, world state, errors |
//! | [`geom`] | `geoscene-geom` | Shapes, collision bodies, the oracle trait, boundary walls |
//! | [`sampler`] | `geoscene-sampler` | Scene specs, layout, pose sampling, builders, samplers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`geoscene-core`).
///
/// Object identities and kinds, typed attribute records, SE(2) poses,
/// [`types::WorldState`] and the error enums.
pub use geoscene_core as types;

/// Geometry and collision queries (`geoscene-geom`).
///
/// The [`geom::CollisionOracle`] trait is the seam samplers use to test
/// candidate scenes; [`geom::GeometricOracle`] is the reference
/// implementation.
pub use geoscene_geom as geom;

/// Scene specs and samplers (`geoscene-sampler`).
///
/// [`sampler::ShelfStorageSampler`] and [`sampler::MotionSampler`] produce
/// finished scenes from [`sampler::ShelfSceneSpec`] and
/// [`sampler::MotionSceneSpec`].
pub use geoscene_sampler as sampler;

/// Common imports for typical geoscene usage.
///
/// ```rust
/// use geoscene::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use geoscene_core::{
        ObjectAttrs, ObjectId, ObjectKind, PoseBounds, SE2Pose, WorldBounds, WorldState,
    };

    // Errors
    pub use geoscene_core::{SceneError, SpecError, StateError};

    // Geometry
    pub use geoscene_geom::{CollisionOracle, GeometricOracle, Universe};

    // Sampling
    pub use geoscene_sampler::{
        MotionSampler, MotionSceneSpec, SamplingMetrics, Scene, SceneFamily, SceneSampler,
        ShelfSceneSpec, ShelfStorageSampler,
    };
}
