//! Goal predicates over finished world states.
//!
//! These are the consumers of shape conversion: each scene family
//! terminates when its predicate holds.

use geoscene_core::{ObjectId, ObjectKind, StateError, WorldState};
use geoscene_geom::{object_shape, rectangle_shape};

/// Whether rectangle object `inner` lies entirely inside rectangle object
/// `outer`.
///
/// Only rectangle-shaped objects can contain or be contained; the robot
/// is never inside anything.
pub fn is_inside(state: &WorldState, inner: &ObjectId, outer: &ObjectId) -> Result<bool, StateError> {
    let inner = state.require(inner)?;
    let outer = state.require(outer)?;
    let (Some(inner), Some(outer)) = (inner.as_rectangle(), outer.as_rectangle()) else {
        return Ok(false);
    };
    Ok(rectangle_shape(outer).contains_rectangle(&rectangle_shape(inner)))
}

/// Motion goal: the robot's base centre lies inside the target region.
pub fn robot_in_target_region(state: &WorldState) -> Result<bool, StateError> {
    let (_, robot) = state.robot()?;
    let (_, region) = state.first_of_kind(ObjectKind::TargetRegion)?;
    Ok(object_shape(region).contains_point(robot.pose.x, robot.pose.y))
}

/// Shelf-storage goal: every target block lies inside the shelf.
///
/// Vacuously true when the state holds no blocks.
pub fn all_blocks_in_shelf(state: &WorldState) -> Result<bool, StateError> {
    let (shelf_id, _) = state.first_of_kind(ObjectKind::Shelf)?;
    for (id, _) in state.of_kind(ObjectKind::TargetBlock) {
        if !is_inside(state, id, shelf_id)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscene_core::{ObjectAttrs, RectangleAttrs, RobotAttrs, Rgb, SE2Pose, StateDraft, ZOrder};

    fn rect(x: f64, y: f64, w: f64, h: f64) -> RectangleAttrs {
        RectangleAttrs {
            pose: SE2Pose::new(x, y, 0.0),
            width: w,
            height: h,
            is_static: false,
            color: Rgb::BLACK,
            z_order: ZOrder::Surface,
        }
    }

    fn shelf_state(block_x: f64) -> WorldState {
        let mut draft = StateDraft::new();
        draft
            .insert("shelf".into(), ObjectAttrs::Shelf(rect(0.0, 0.0, 1.0, 0.5)))
            .unwrap()
            .insert("block0".into(), ObjectAttrs::TargetBlock(rect(0.1, 0.1, 0.3, 0.1)))
            .unwrap()
            .insert(
                "block1".into(),
                ObjectAttrs::TargetBlock(rect(block_x, 0.1, 0.3, 0.1)),
            )
            .unwrap();
        draft.finalize()
    }

    #[test]
    fn blocks_in_shelf() {
        assert!(all_blocks_in_shelf(&shelf_state(0.5)).unwrap());
        // Straddles the right edge.
        assert!(!all_blocks_in_shelf(&shelf_state(0.8)).unwrap());
        assert!(is_inside(&shelf_state(0.8), &"block0".into(), &"shelf".into()).unwrap());
    }

    #[test]
    fn missing_shelf_is_an_error() {
        let state = StateDraft::new().finalize();
        assert_eq!(
            all_blocks_in_shelf(&state).unwrap_err(),
            StateError::MissingKind {
                kind: ObjectKind::Shelf
            }
        );
    }

    #[test]
    fn robot_centre_in_region() {
        let build = |x: f64| {
            let mut draft = StateDraft::new();
            draft
                .insert(
                    "robot".into(),
                    ObjectAttrs::Robot(RobotAttrs::retracted(
                        SE2Pose::new(x, 0.5, 0.0),
                        0.1,
                        0.2,
                        0.07,
                        0.01,
                    )),
                )
                .unwrap()
                .insert(
                    "target_region".into(),
                    ObjectAttrs::TargetRegion(rect(1.0, 0.0, 0.5, 1.0)),
                )
                .unwrap();
            draft.finalize()
        };
        assert!(robot_in_target_region(&build(1.2)).unwrap());
        // Base overlaps the region but its centre does not.
        assert!(!robot_in_target_region(&build(0.95)).unwrap());
        assert!(!is_inside(&build(1.2), &"robot".into(), &"target_region".into()).unwrap());
    }
}
