//! Typed attribute records, one per object kind.
//!
//! Each object in a scene carries a fixed set of named scalar features
//! determined by its kind. Rather than a string-keyed map, the record is
//! a tagged union ([`ObjectAttrs`]) with one fixed-field struct per shape:
//! [`RobotAttrs`] for the robot and [`RectangleAttrs`] for everything else.
//! Name-based access ([`ObjectAttrs::get`]) and flat export
//! ([`ObjectAttrs::features`]) follow the order of
//! [`ObjectKind::feature_names`].

use smallvec::SmallVec;

use crate::id::ObjectKind;
use crate::pose::SE2Pose;

/// Paint and collision layer of a body.
///
/// Two bodies may only collide when their layers interact; see
/// [`ZOrder::may_collide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZOrder {
    /// Floor layer: the shelf surface.
    Floor,
    /// Surface layer: blocks and the robot's arm and gripper.
    Surface,
    /// Collides with every layer except [`ZOrder::None`].
    All,
    /// Collides with nothing: goal markers.
    None,
}

impl ZOrder {
    /// Integer encoding used in flat feature vectors.
    pub fn value(self) -> i32 {
        match self {
            Self::Floor => 0,
            Self::Surface => 1,
            Self::All => 100,
            Self::None => -1,
        }
    }

    /// Whether bodies on these two layers can collide.
    pub fn may_collide(self, other: ZOrder) -> bool {
        if self == Self::None || other == Self::None {
            return false;
        }
        self == Self::All || other == Self::All || self == other
    }
}

/// An RGB colour with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    /// Colour of walls, bookends and passage obstacles.
    pub const BLACK: Rgb = Rgb(0.1, 0.1, 0.1);
    /// Colour of the shelf and target region.
    pub const PURPLE: Rgb = Rgb(128.0 / 255.0, 0.0, 128.0 / 255.0);
}

/// Features of a rectangle-shaped object.
///
/// `pose` locates the lower-left corner; the rectangle is rotated by
/// `pose.theta` about that corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleAttrs {
    /// Corner position and rotation.
    pub pose: SE2Pose,
    /// Extent along the rotated x axis.
    pub width: f64,
    /// Extent along the rotated y axis.
    pub height: f64,
    /// Immovable for collision and physics purposes.
    pub is_static: bool,
    /// Display colour.
    pub color: Rgb,
    /// Collision layer.
    pub z_order: ZOrder,
}

/// Features of the mobile-base robot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobotAttrs {
    /// Base centre and heading.
    pub pose: SE2Pose,
    /// Radius of the circular base.
    pub base_radius: f64,
    /// Current arm extension measured from the base centre.
    pub arm_joint: f64,
    /// Maximum arm extension.
    pub arm_length: f64,
    /// Vacuum activation in `[0, 1]`.
    pub vacuum: f64,
    /// Gripper extent perpendicular to the arm.
    pub gripper_height: f64,
    /// Gripper extent along the arm.
    pub gripper_width: f64,
}

impl RobotAttrs {
    /// A robot at `pose` with the arm fully retracted and the vacuum off.
    pub fn retracted(
        pose: SE2Pose,
        base_radius: f64,
        arm_length: f64,
        gripper_height: f64,
        gripper_width: f64,
    ) -> Self {
        Self {
            pose,
            base_radius,
            arm_joint: base_radius,
            arm_length,
            vacuum: 0.0,
            gripper_height,
            gripper_width,
        }
    }
}

/// The attribute record of one object, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObjectAttrs {
    /// See [`ObjectKind::Robot`].
    Robot(RobotAttrs),
    /// See [`ObjectKind::Wall`].
    Wall(RectangleAttrs),
    /// See [`ObjectKind::RectangleObstacle`].
    RectangleObstacle(RectangleAttrs),
    /// See [`ObjectKind::TargetBlock`].
    TargetBlock(RectangleAttrs),
    /// See [`ObjectKind::Shelf`].
    Shelf(RectangleAttrs),
    /// See [`ObjectKind::TargetRegion`].
    TargetRegion(RectangleAttrs),
}

impl ObjectAttrs {
    /// The kind tag of this record.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Robot(_) => ObjectKind::Robot,
            Self::Wall(_) => ObjectKind::Wall,
            Self::RectangleObstacle(_) => ObjectKind::RectangleObstacle,
            Self::TargetBlock(_) => ObjectKind::TargetBlock,
            Self::Shelf(_) => ObjectKind::Shelf,
            Self::TargetRegion(_) => ObjectKind::TargetRegion,
        }
    }

    /// The object's pose (base centre for the robot, corner otherwise).
    pub fn pose(&self) -> SE2Pose {
        match self {
            Self::Robot(r) => r.pose,
            _ => self.as_rectangle().map(|r| r.pose).unwrap_or_default(),
        }
    }

    /// Whether the object is immovable. The robot never is.
    pub fn is_static(&self) -> bool {
        self.as_rectangle().is_some_and(|r| r.is_static)
    }

    /// The robot record, if this is the robot.
    pub fn as_robot(&self) -> Option<&RobotAttrs> {
        match self {
            Self::Robot(r) => Some(r),
            _ => None,
        }
    }

    /// The rectangle record, for every kind except the robot.
    pub fn as_rectangle(&self) -> Option<&RectangleAttrs> {
        match self {
            Self::Robot(_) => None,
            Self::Wall(r)
            | Self::RectangleObstacle(r)
            | Self::TargetBlock(r)
            | Self::Shelf(r)
            | Self::TargetRegion(r) => Some(r),
        }
    }

    /// Look up a feature by name.
    ///
    /// Returns `None` if the kind does not carry that feature. Booleans
    /// are encoded as `0.0`/`1.0` and the z-order by [`ZOrder::value`].
    pub fn get(&self, feature: &str) -> Option<f64> {
        let idx = self
            .kind()
            .feature_names()
            .iter()
            .position(|name| *name == feature)?;
        self.features().get(idx).copied()
    }

    /// All feature values in [`ObjectKind::feature_names`] order.
    pub fn features(&self) -> SmallVec<[f64; 10]> {
        match self {
            Self::Robot(r) => SmallVec::from_slice(&[
                r.pose.x,
                r.pose.y,
                r.pose.theta,
                r.base_radius,
                r.arm_joint,
                r.arm_length,
                r.vacuum,
                r.gripper_height,
                r.gripper_width,
            ]),
            _ => {
                let Some(r) = self.as_rectangle() else {
                    return SmallVec::new();
                };
                SmallVec::from_slice(&[
                    r.pose.x,
                    r.pose.y,
                    r.pose.theta,
                    if r.is_static { 1.0 } else { 0.0 },
                    r.color.0,
                    r.color.1,
                    r.color.2,
                    f64::from(r.z_order.value()),
                    r.width,
                    r.height,
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> ObjectAttrs {
        ObjectAttrs::TargetBlock(RectangleAttrs {
            pose: SE2Pose::new(1.0, 2.0, 0.25),
            width: 0.28,
            height: 0.04,
            is_static: false,
            color: Rgb(0.0, 0.3, 1.0),
            z_order: ZOrder::Surface,
        })
    }

    #[test]
    fn z_order_collision_table() {
        use ZOrder::*;
        assert!(All.may_collide(Floor));
        assert!(Surface.may_collide(All));
        assert!(Surface.may_collide(Surface));
        assert!(!Surface.may_collide(Floor));
        assert!(!None.may_collide(All));
        assert!(!All.may_collide(None));
    }

    #[test]
    fn rectangle_features_by_name() {
        let b = block();
        assert_eq!(b.kind(), ObjectKind::TargetBlock);
        assert_eq!(b.get("x"), Some(1.0));
        assert_eq!(b.get("static"), Some(0.0));
        assert_eq!(b.get("z_order"), Some(1.0));
        assert_eq!(b.get("height"), Some(0.04));
        assert_eq!(b.get("vacuum"), None);
        assert_eq!(b.features().len(), ObjectKind::TargetBlock.feature_names().len());
    }

    #[test]
    fn retracted_robot_has_arm_at_base_radius_and_vacuum_off() {
        let r = RobotAttrs::retracted(SE2Pose::new(0.5, 0.5, 0.0), 0.2, 0.8, 0.14, 0.02);
        let attrs = ObjectAttrs::Robot(r);
        assert_eq!(attrs.get("arm_joint"), Some(0.2));
        assert_eq!(attrs.get("vacuum"), Some(0.0));
        assert!(!attrs.is_static());
        assert!(attrs.as_rectangle().is_none());
        assert_eq!(attrs.features().len(), 9);
    }
}
