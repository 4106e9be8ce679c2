//! The collision oracle seam and its geometric implementation.

use geoscene_core::{ObjectId, WorldState};
use smallvec::SmallVec;

use crate::body::{bodies, Body};

/// The set of objects an oracle query checks against.
#[derive(Clone, Copy, Debug)]
pub enum Universe<'a> {
    /// Every object in the state.
    All,
    /// Only the listed objects.
    Only(&'a [ObjectId]),
}

/// Predicate deciding whether any object of interest overlaps any object
/// in the universe.
///
/// Implementations must be pure: samplers call the oracle once per
/// rejection-sampling attempt on freshly built candidate states and rely
/// on identical answers for identical inputs.
pub trait CollisionOracle {
    /// Whether any object in `of_interest` collides with any other object
    /// in `universe`.
    ///
    /// Objects listed in `exclusions` are ignored on both sides. An object
    /// is never compared with itself. Identities missing from `state` have
    /// no geometry and never collide.
    fn has_collision(
        &self,
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
    ) -> bool;

    /// Whether any object in `of_interest` overlaps any other object in
    /// `universe` by shape alone.
    ///
    /// Collision layers and the static-pair rule are ignored, so this also
    /// sees overlaps between fixtures such as a goal region and an
    /// obstacle. Defaults to [`has_collision`](Self::has_collision).
    fn has_overlap(
        &self,
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
    ) -> bool {
        self.has_collision(state, of_interest, universe, exclusions)
    }
}

impl<T: CollisionOracle + ?Sized> CollisionOracle for &T {
    fn has_collision(
        &self,
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
    ) -> bool {
        (**self).has_collision(state, of_interest, universe, exclusions)
    }

    fn has_overlap(
        &self,
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
    ) -> bool {
        (**self).has_overlap(state, of_interest, universe, exclusions)
    }
}

/// Exact shape-overlap oracle.
///
/// Semantics:
/// - pairs where both objects are static are skipped
/// - bodies interact only if their z-order layers may collide
/// - shapes that merely touch do not collide
///
/// [`has_overlap`](CollisionOracle::has_overlap) drops the first two rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeometricOracle;

impl GeometricOracle {
    /// Create the oracle.
    pub fn new() -> Self {
        Self
    }

    fn pair_collides(a: &[Body], b: &[Body]) -> bool {
        a.iter().any(|ba| b.iter().any(|bb| ba.collides_with(bb)))
    }

    fn pair_overlaps(a: &[Body], b: &[Body]) -> bool {
        a.iter()
            .any(|ba| b.iter().any(|bb| ba.shape.intersects(&bb.shape)))
    }

    /// Shared query loop; `layered` selects collision or plain overlap.
    fn query(
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
        layered: bool,
    ) -> bool {
        let others: Vec<(&ObjectId, bool, SmallVec<[Body; 3]>)> = match universe {
            Universe::All => state
                .iter()
                .filter(|(id, _)| !exclusions.contains(id))
                .map(|(id, attrs)| (id, attrs.is_static(), bodies(attrs)))
                .collect(),
            Universe::Only(ids) => ids
                .iter()
                .filter(|id| !exclusions.contains(id))
                .filter_map(|id| state.get(id).map(|attrs| (id, attrs.is_static(), bodies(attrs))))
                .collect(),
        };

        for id in of_interest.iter().filter(|id| !exclusions.contains(id)) {
            let Some(attrs) = state.get(id) else {
                continue;
            };
            let own = bodies(attrs);
            let own_static = attrs.is_static();
            for (other_id, other_static, other_bodies) in &others {
                if *other_id == id {
                    continue;
                }
                let hit = if layered {
                    !(own_static && *other_static) && Self::pair_collides(&own, other_bodies)
                } else {
                    Self::pair_overlaps(&own, other_bodies)
                };
                if hit {
                    return true;
                }
            }
        }
        false
    }

    /// Every unordered pair of colliding objects in the state, in
    /// insertion order.
    pub fn colliding_pairs(&self, state: &WorldState) -> Vec<(ObjectId, ObjectId)> {
        let entries: Vec<(&ObjectId, bool, SmallVec<[Body; 3]>)> = state
            .iter()
            .map(|(id, attrs)| (id, attrs.is_static(), bodies(attrs)))
            .collect();
        let mut pairs = Vec::new();
        for (i, (id_a, static_a, bodies_a)) in entries.iter().enumerate() {
            for (id_b, static_b, bodies_b) in &entries[i + 1..] {
                if *static_a && *static_b {
                    continue;
                }
                if Self::pair_collides(bodies_a, bodies_b) {
                    pairs.push(((*id_a).clone(), (*id_b).clone()));
                }
            }
        }
        pairs
    }
}

impl CollisionOracle for GeometricOracle {
    fn has_collision(
        &self,
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
    ) -> bool {
        Self::query(state, of_interest, universe, exclusions, true)
    }

    fn has_overlap(
        &self,
        state: &WorldState,
        of_interest: &[ObjectId],
        universe: Universe<'_>,
        exclusions: &[ObjectId],
    ) -> bool {
        Self::query(state, of_interest, universe, exclusions, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscene_core::{ObjectAttrs, RectangleAttrs, Rgb, SE2Pose, StateDraft, ZOrder};

    fn rect(x: f64, is_static: bool, z_order: ZOrder) -> RectangleAttrs {
        RectangleAttrs {
            pose: SE2Pose::new(x, 0.0, 0.0),
            width: 1.0,
            height: 1.0,
            is_static,
            color: Rgb::BLACK,
            z_order,
        }
    }

    fn state(objects: Vec<(&str, ObjectAttrs)>) -> WorldState {
        let mut draft = StateDraft::new();
        for (name, attrs) in objects {
            draft.insert(name.into(), attrs).unwrap();
        }
        draft.finalize()
    }

    #[test]
    fn overlapping_blocks_collide() {
        let s = state(vec![
            ("a", ObjectAttrs::TargetBlock(rect(0.0, false, ZOrder::Surface))),
            ("b", ObjectAttrs::TargetBlock(rect(0.5, false, ZOrder::Surface))),
        ]);
        let oracle = GeometricOracle::new();
        assert!(oracle.has_collision(&s, &["a".into()], Universe::All, &[]));
        assert_eq!(oracle.colliding_pairs(&s), vec![("a".into(), "b".into())]);
    }

    #[test]
    fn static_pairs_are_skipped() {
        let s = state(vec![
            ("w", ObjectAttrs::Wall(rect(0.0, true, ZOrder::All))),
            ("o", ObjectAttrs::RectangleObstacle(rect(0.5, true, ZOrder::All))),
        ]);
        let oracle = GeometricOracle::new();
        assert!(!oracle.has_collision(&s, &["w".into()], Universe::All, &[]));
        assert!(oracle.colliding_pairs(&s).is_empty());
    }

    #[test]
    fn layers_and_exclusions_are_respected() {
        let s = state(vec![
            ("shelf", ObjectAttrs::Shelf(rect(0.0, true, ZOrder::Floor))),
            ("block", ObjectAttrs::TargetBlock(rect(0.5, false, ZOrder::Surface))),
            ("wall", ObjectAttrs::Wall(rect(0.9, true, ZOrder::All))),
        ]);
        let oracle = GeometricOracle::new();
        let block: ObjectId = "block".into();
        let shelf: ObjectId = "shelf".into();
        let wall: ObjectId = "wall".into();
        assert!(!oracle.has_collision(&s, &[block.clone()], Universe::Only(&[shelf]), &[]));
        assert!(oracle.has_collision(&s, &[block.clone()], Universe::All, &[]));
        assert!(!oracle.has_collision(&s, &[block], Universe::All, &[wall]));
    }

    #[test]
    fn overlap_ignores_layers_and_static_pairs() {
        let s = state(vec![
            ("region", ObjectAttrs::TargetRegion(rect(0.0, true, ZOrder::None))),
            ("o", ObjectAttrs::RectangleObstacle(rect(0.5, true, ZOrder::All))),
            ("far", ObjectAttrs::RectangleObstacle(rect(3.0, true, ZOrder::All))),
        ]);
        let oracle = GeometricOracle::new();
        let region: ObjectId = "region".into();
        let only_far: [ObjectId; 1] = ["far".into()];
        assert!(!oracle.has_collision(&s, &[region.clone()], Universe::All, &[]));
        assert!(oracle.has_overlap(&s, &[region.clone()], Universe::All, &[]));
        assert!(!oracle.has_overlap(&s, &[region.clone()], Universe::Only(&only_far), &[]));
        assert!(!oracle.has_overlap(&s, &[region], Universe::All, &["o".into()]));
    }

    #[test]
    fn unknown_ids_never_collide() {
        let s = state(vec![(
            "a",
            ObjectAttrs::TargetBlock(rect(0.0, false, ZOrder::Surface)),
        )]);
        assert!(!GeometricOracle.has_collision(&s, &["ghost".into()], Universe::All, &[]));
    }
}
