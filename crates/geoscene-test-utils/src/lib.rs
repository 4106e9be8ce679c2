//! Test utilities and mock oracles for geoscene development.
//!
//! Provides mock [`CollisionOracle`] implementations in [`oracles`],
//! seeded generators, and assertions over finished world states.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod oracles;

pub use oracles::{AlwaysCollide, CountingOracle, NeverCollide, ScriptedOracle};

use geoscene_core::{ObjectId, ObjectKind, WorldBounds, WorldState};
use geoscene_geom::{object_shape, GeometricOracle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The reference seeded generator.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Panic with the offending pairs if any two objects overlap.
pub fn assert_collision_free(state: &WorldState) {
    let pairs = GeometricOracle::new().colliding_pairs(state);
    assert!(pairs.is_empty(), "colliding pairs: {pairs:?}");
}

/// Panic unless every object of `kind` has its pose strictly inside
/// `bounds`.
pub fn assert_poses_inside(state: &WorldState, kind: ObjectKind, bounds: &WorldBounds) {
    for (id, attrs) in state.of_kind(kind) {
        let p = attrs.pose();
        assert!(
            bounds.strictly_contains(p.x, p.y),
            "{id} at ({}, {}) is not strictly inside the world",
            p.x,
            p.y
        );
    }
}

/// Panic if the shape of `id` overlaps any object of `kind`.
///
/// Compares shapes directly, so it also covers objects on no collision
/// layer.
pub fn assert_clear_of_kind(state: &WorldState, id: &ObjectId, kind: ObjectKind) {
    let own = object_shape(state.require(id).expect("object present"));
    for (other_id, attrs) in state.of_kind(kind) {
        assert!(
            other_id == id || !own.intersects(&object_shape(attrs)),
            "{id} overlaps {other_id}"
        );
    }
}

/// Names of all objects of `kind`, in insertion order.
pub fn names_of_kind(state: &WorldState, kind: ObjectKind) -> Vec<String> {
    state
        .of_kind(kind)
        .map(|(id, _)| id.as_str().to_string())
        .collect()
}
