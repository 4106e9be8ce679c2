//! Conversion from attribute records to layered collision bodies.

use geoscene_core::{ObjectAttrs, RectangleAttrs, RobotAttrs, ZOrder};
use smallvec::{smallvec, SmallVec};

use crate::shape::{Circle, Rectangle, Shape};

/// One rigid piece of an object on a single collision layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Geometry of the piece.
    pub shape: Shape,
    /// Layer the piece occupies.
    pub z_order: ZOrder,
}

impl Body {
    /// Whether the two bodies share a layer and overlap.
    pub fn collides_with(&self, other: &Body) -> bool {
        self.z_order.may_collide(other.z_order) && self.shape.intersects(&other.shape)
    }
}

/// The rectangle described by a rectangle record.
pub fn rectangle_shape(attrs: &RectangleAttrs) -> Rectangle {
    Rectangle::new(
        attrs.pose.x,
        attrs.pose.y,
        attrs.width,
        attrs.height,
        attrs.pose.theta,
    )
}

/// Robot pieces: base disc on every layer, arm and gripper on the surface
/// layer so they can reach over the floor-layer shelf.
fn robot_bodies(r: &RobotAttrs) -> SmallVec<[Body; 3]> {
    let (s, c) = r.pose.theta.sin_cos();
    let base = Circle::new(r.pose.x, r.pose.y, r.base_radius);

    let arm_mid = r.arm_joint / 2.0;
    let arm = Rectangle::from_center(
        r.pose.x + c * arm_mid,
        r.pose.y + s * arm_mid,
        r.arm_joint,
        r.gripper_width,
        r.pose.theta,
    );

    let grip_mid = r.arm_joint + r.gripper_width / 2.0;
    let gripper = Rectangle::from_center(
        r.pose.x + c * grip_mid,
        r.pose.y + s * grip_mid,
        r.gripper_width,
        r.gripper_height,
        r.pose.theta,
    );

    smallvec![
        Body {
            shape: Shape::Circle(base),
            z_order: ZOrder::All,
        },
        Body {
            shape: Shape::Rectangle(arm),
            z_order: ZOrder::Surface,
        },
        Body {
            shape: Shape::Rectangle(gripper),
            z_order: ZOrder::Surface,
        },
    ]
}

/// All collision bodies of an object.
pub fn bodies(attrs: &ObjectAttrs) -> SmallVec<[Body; 3]> {
    match attrs {
        ObjectAttrs::Robot(r) => robot_bodies(r),
        _ => match attrs.as_rectangle() {
            Some(r) => smallvec![Body {
                shape: Shape::Rectangle(rectangle_shape(r)),
                z_order: r.z_order,
            }],
            None => SmallVec::new(),
        },
    }
}

/// The single shape that represents an object for containment queries.
///
/// The robot is represented by its base disc.
pub fn object_shape(attrs: &ObjectAttrs) -> Shape {
    match attrs {
        ObjectAttrs::Robot(r) => Shape::Circle(Circle::new(r.pose.x, r.pose.y, r.base_radius)),
        _ => match attrs.as_rectangle() {
            Some(r) => Shape::Rectangle(rectangle_shape(r)),
            None => Shape::Circle(Circle::new(0.0, 0.0, 0.0)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscene_core::{Rgb, SE2Pose};

    fn robot(theta: f64) -> RobotAttrs {
        RobotAttrs::retracted(SE2Pose::new(1.0, 1.0, theta), 0.2, 0.8, 0.14, 0.02)
    }

    #[test]
    fn retracted_gripper_sits_just_outside_the_base() {
        let b = robot_bodies(&robot(0.0));
        assert_eq!(b.len(), 3);
        let Shape::Rectangle(gripper) = b[2].shape else {
            panic!("gripper should be a rectangle");
        };
        let c = gripper.center();
        assert!((c.x - 1.21).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
        assert_eq!(b[0].z_order, ZOrder::All);
        assert_eq!(b[2].z_order, ZOrder::Surface);
    }

    #[test]
    fn floor_layer_rectangle_ignores_robot_arm_but_not_base() {
        let floor = Body {
            shape: Shape::Rectangle(Rectangle::new(1.15, 0.9, 0.2, 0.2, 0.0)),
            z_order: ZOrder::Floor,
        };
        let b = robot_bodies(&robot(0.0));
        assert!(b[0].collides_with(&floor));
        assert!(!b[2].collides_with(&floor));
    }

    #[test]
    fn rectangle_record_becomes_one_body() {
        let attrs = ObjectAttrs::Shelf(RectangleAttrs {
            pose: SE2Pose::new(0.0, 2.0, 0.0),
            width: 1.0,
            height: 0.5,
            is_static: true,
            color: Rgb::PURPLE,
            z_order: ZOrder::Floor,
        });
        let b = bodies(&attrs);
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].z_order, ZOrder::Floor);
        assert!(object_shape(&attrs).contains_point(0.5, 2.25));
    }
}
