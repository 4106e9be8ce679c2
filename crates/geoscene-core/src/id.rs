//! Object identities and the closed set of object kinds.

use std::fmt;

/// Unique name of an object within one scene (e.g. `"robot"`, `"block3"`).
///
/// Identities are stable for the lifetime of an episode and are never
/// reused across episodes: every sampled scene constructs fresh ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Create an identity from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a numbered identity such as `block0` or `obstacle3`.
    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}{index}"))
    }

    /// The underlying name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for ObjectId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Type tag of an object.
///
/// The set is closed: every attribute record in a [`WorldState`](crate::WorldState)
/// is one of these kinds, and the kind fixes which features it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
    /// The mobile-base robot with a retractable vacuum arm.
    Robot,
    /// A static boundary wall just outside the world bounds.
    Wall,
    /// A generic rectangle (bookends, passage obstacles).
    RectangleObstacle,
    /// A movable block the robot must manipulate.
    TargetBlock,
    /// The storage shelf.
    Shelf,
    /// The goal region of the motion scene.
    TargetRegion,
}

/// Feature names of the robot, in record order.
const ROBOT_FEATURES: &[&str] = &[
    "x",
    "y",
    "theta",
    "base_radius",
    "arm_joint",
    "arm_length",
    "vacuum",
    "gripper_height",
    "gripper_width",
];

/// Feature names of every rectangle-shaped kind, in record order.
const RECTANGLE_FEATURES: &[&str] = &[
    "x", "y", "theta", "static", "color_r", "color_g", "color_b", "z_order", "width", "height",
];

impl ObjectKind {
    /// All kinds, in declaration order.
    pub const ALL: [ObjectKind; 6] = [
        ObjectKind::Robot,
        ObjectKind::Wall,
        ObjectKind::RectangleObstacle,
        ObjectKind::TargetBlock,
        ObjectKind::Shelf,
        ObjectKind::TargetRegion,
    ];

    /// Snake-case name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Robot => "robot",
            Self::Wall => "wall",
            Self::RectangleObstacle => "rectangle",
            Self::TargetBlock => "target_block",
            Self::Shelf => "shelf",
            Self::TargetRegion => "target_region",
        }
    }

    /// Ordered feature names carried by objects of this kind.
    pub fn feature_names(self) -> &'static [&'static str] {
        match self {
            Self::Robot => ROBOT_FEATURES,
            _ => RECTANGLE_FEATURES,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_ids_format_prefix_and_number() {
        assert_eq!(ObjectId::indexed("block", 0).as_str(), "block0");
        assert_eq!(ObjectId::indexed("obstacle", 17).to_string(), "obstacle17");
    }

    #[test]
    fn feature_lists_are_fixed_per_kind() {
        assert_eq!(ObjectKind::Robot.feature_names().len(), 9);
        for kind in ObjectKind::ALL.into_iter().filter(|k| *k != ObjectKind::Robot) {
            assert_eq!(kind.feature_names(), RECTANGLE_FEATURES, "{kind}");
        }
    }
}
