//! The sampler abstraction shared by every scene family.

use std::fmt;

use geoscene_core::{SceneError, WorldState};
use rand::RngCore;

use crate::metrics::SamplingMetrics;

/// The scene families this crate can sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneFamily {
    /// Blocks split between a shelf and the floor below it.
    ShelfStorage,
    /// A robot behind a band of narrow-passage obstacle columns.
    Motion,
}

impl fmt::Display for SceneFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ShelfStorage => "shelf-storage",
            Self::Motion => "motion",
        })
    }
}

/// One sampled initial configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// The finalized, collision-free world state.
    pub state: WorldState,
    /// Work done to produce it.
    pub metrics: SamplingMetrics,
}

/// A source of initial world states.
///
/// Object-safe so heterogeneous samplers can be held as
/// `Box<dyn SceneSampler>`. Implementations draw every random quantity
/// from `rng`; the same seeded source always yields the same scene.
pub trait SceneSampler {
    /// Which family this sampler produces.
    fn family(&self) -> SceneFamily;

    /// Sample one scene.
    ///
    /// Any error aborts the whole call; no partial state is returned.
    fn sample_scene(&self, rng: &mut dyn RngCore) -> Result<Scene, SceneError>;
}
