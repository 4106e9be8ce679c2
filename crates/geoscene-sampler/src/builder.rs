//! Assembly of world states from a shared base layer.
//!
//! A [`StateBuilder`] owns an immutable base state (typically the boundary
//! walls, later the accepted skeleton) and produces new finalized states by
//! copying that base into a fresh [`StateDraft`] and extending it. Rejected
//! candidates are simply dropped; nothing they inserted can leak into the
//! base or into later candidates.
//!
//! Target blocks are named `block{n}`, numbered from 0 in insertion order
//! across the whole state. The newest block is always the one with the
//! highest index.

use geoscene_core::{
    ActionLimits, ObjectAttrs, ObjectId, ObjectKind, RectangleAttrs, RobotAttrs, StateDraft,
    StateError, WorldBounds, WorldState,
};
use geoscene_geom::boundary_walls;

/// Name of the robot object.
pub const ROBOT_ID: &str = "robot";

/// Prefix of target block names.
pub const BLOCK_PREFIX: &str = "block";

/// Identity the next target block inserted into `state` will receive.
pub fn next_block_id(state: &WorldState) -> ObjectId {
    ObjectId::indexed(BLOCK_PREFIX, state.count_kind(ObjectKind::TargetBlock))
}

fn insert_blocks(draft: &mut StateDraft, first: usize, blocks: &[RectangleAttrs]) -> Result<(), StateError> {
    for (offset, block) in blocks.iter().enumerate() {
        draft.insert(
            ObjectId::indexed(BLOCK_PREFIX, first + offset),
            ObjectAttrs::TargetBlock(*block),
        )?;
    }
    Ok(())
}

/// Builds world states on top of a fixed base layer.
#[derive(Clone, Debug, Default)]
pub struct StateBuilder {
    base: WorldState,
}

impl StateBuilder {
    /// A builder whose base holds the given constant elements, in order.
    pub fn new<I>(constants: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = (ObjectId, ObjectAttrs)>,
    {
        let mut draft = StateDraft::new();
        for (id, attrs) in constants {
            draft.insert(id, attrs)?;
        }
        Ok(Self {
            base: draft.finalize(),
        })
    }

    /// A builder whose base is the four boundary walls of `world`.
    pub fn with_walls(world: &WorldBounds, limits: &ActionLimits) -> Result<Self, StateError> {
        Self::new(boundary_walls(world, limits))
    }

    /// A builder whose base is an already finalized state.
    pub fn from_state(base: WorldState) -> Self {
        Self { base }
    }

    /// The base layer every built state starts from.
    pub fn base(&self) -> &WorldState {
        &self.base
    }

    /// Consume the builder, returning its base layer.
    pub fn into_state(self) -> WorldState {
        self.base
    }

    /// Assemble a full state: the base layer, then the robot, then the
    /// layout elements in order, then `blocks` as numbered target blocks.
    ///
    /// The robot is inserted as [`ROBOT_ID`]. Identities must be unique
    /// across all inputs and the base, otherwise
    /// [`StateError::DuplicateObject`] is returned and nothing is built.
    pub fn build(
        &self,
        robot: RobotAttrs,
        layout: &[(ObjectId, ObjectAttrs)],
        blocks: &[RectangleAttrs],
    ) -> Result<WorldState, StateError> {
        let mut draft = StateDraft::extending(&self.base);
        draft.insert(ObjectId::new(ROBOT_ID), ObjectAttrs::Robot(robot))?;
        for (id, attrs) in layout {
            draft.insert(id.clone(), *attrs)?;
        }
        let first = self.base.count_kind(ObjectKind::TargetBlock);
        insert_blocks(&mut draft, first, blocks)?;
        Ok(draft.finalize())
    }

    /// The base layer plus `blocks`, numbered after the blocks already
    /// present.
    pub fn extend(&self, blocks: &[RectangleAttrs]) -> Result<WorldState, StateError> {
        let mut draft = StateDraft::extending(&self.base);
        let first = self.base.count_kind(ObjectKind::TargetBlock);
        insert_blocks(&mut draft, first, blocks)?;
        Ok(draft.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscene_core::{Rgb, SE2Pose, ZOrder};

    fn block(x: f64) -> RectangleAttrs {
        RectangleAttrs {
            pose: SE2Pose::new(x, 1.0, 0.0),
            width: 0.28,
            height: 0.04,
            is_static: false,
            color: Rgb(0.0, 0.3, 1.0),
            z_order: ZOrder::Surface,
        }
    }

    fn robot() -> RobotAttrs {
        RobotAttrs::retracted(SE2Pose::new(1.0, 1.0, 0.0), 0.2, 0.8, 0.14, 0.02)
    }

    fn walls() -> StateBuilder {
        StateBuilder::with_walls(
            &WorldBounds::new(0.0, 5.0, 0.0, 3.0),
            &ActionLimits::default(),
        )
        .unwrap()
    }

    #[test]
    fn build_orders_walls_robot_layout_blocks() {
        let shelf = ObjectAttrs::Shelf(RectangleAttrs {
            is_static: true,
            z_order: ZOrder::Floor,
            ..block(0.0)
        });
        let state = walls()
            .build(robot(), &[("shelf".into(), shelf)], &[block(1.0), block(2.0)])
            .unwrap();
        let names: Vec<&str> = state.ids().map(ObjectId::as_str).collect();
        assert_eq!(
            names,
            [
                "left_wall",
                "right_wall",
                "bottom_wall",
                "top_wall",
                "robot",
                "shelf",
                "block0",
                "block1"
            ]
        );
        let (_, r) = state.robot().unwrap();
        assert_eq!(r.arm_joint, r.base_radius);
        assert_eq!(r.vacuum, 0.0);
    }

    #[test]
    fn extend_numbers_after_existing_blocks_and_leaves_base_untouched() {
        let skeleton = walls().build(robot(), &[], &[block(1.0)]).unwrap();
        let builder = StateBuilder::from_state(skeleton);
        assert_eq!(next_block_id(builder.base()), ObjectId::new("block1"));

        let candidate = builder.extend(&[block(2.0)]).unwrap();
        assert!(candidate.contains(&"block1".into()));
        assert!(!builder.base().contains(&"block1".into()));
        assert_eq!(candidate.len(), builder.base().len() + 1);
    }

    #[test]
    fn duplicate_layout_identity_is_rejected() {
        let wall = walls().base().get(&"left_wall".into()).copied().unwrap();
        let err = walls()
            .build(robot(), &[("left_wall".into(), wall)], &[])
            .unwrap_err();
        assert_eq!(
            err,
            StateError::DuplicateObject {
                id: "left_wall".into()
            }
        );
    }
}
