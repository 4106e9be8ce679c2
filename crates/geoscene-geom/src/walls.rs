//! Static boundary walls surrounding the world.

use geoscene_core::{
    ActionLimits, ObjectAttrs, ObjectId, RectangleAttrs, Rgb, SE2Pose, WorldBounds, ZOrder,
};

fn wall(x: f64, y: f64, width: f64, height: f64) -> ObjectAttrs {
    ObjectAttrs::Wall(RectangleAttrs {
        pose: SE2Pose::new(x, y, 0.0),
        width,
        height,
        is_static: true,
        color: Rgb::BLACK,
        z_order: ZOrder::All,
    })
}

/// Four walls enclosing `bounds`, each lying just outside one edge.
///
/// Wall thickness is twice the robot's largest step towards that wall,
/// so a single action can never carry the robot through it. The top and
/// bottom walls also span the side walls' thickness to close the corners.
///
/// Returned in the order left, right, bottom, top.
pub fn boundary_walls(bounds: &WorldBounds, limits: &ActionLimits) -> Vec<(ObjectId, ObjectAttrs)> {
    let left_t = 2.0 * limits.min_dx.abs();
    let right_t = 2.0 * limits.max_dx.abs();
    let bottom_t = 2.0 * limits.min_dy.abs();
    let top_t = 2.0 * limits.max_dy.abs();
    let span = left_t + bounds.width() + right_t;

    vec![
        (
            ObjectId::new("left_wall"),
            wall(bounds.min_x - left_t, bounds.min_y, left_t, bounds.height()),
        ),
        (
            ObjectId::new("right_wall"),
            wall(bounds.max_x, bounds.min_y, right_t, bounds.height()),
        ),
        (
            ObjectId::new("bottom_wall"),
            wall(bounds.min_x - left_t, bounds.min_y - bottom_t, span, bottom_t),
        ),
        (
            ObjectId::new("top_wall"),
            wall(bounds.min_x - left_t, bounds.max_y, span, top_t),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::rectangle_shape;

    #[test]
    fn walls_lie_outside_the_world() {
        let bounds = WorldBounds::new(0.0, 5.0, 0.0, 3.0);
        let walls = boundary_walls(&bounds, &ActionLimits::default());
        assert_eq!(walls.len(), 4);
        for (id, attrs) in &walls {
            assert!(attrs.is_static(), "{id}");
            let r = rectangle_shape(attrs.as_rectangle().unwrap());
            // No interior point of the world is covered.
            assert!(!r.contains_point(2.5, 1.5), "{id}");
            for v in r.vertices() {
                assert!(!bounds.strictly_contains(v.x, v.y), "{id} corner inside world");
            }
        }
    }

    #[test]
    fn thickness_follows_action_limits() {
        let bounds = WorldBounds::new(0.0, 1.0, 0.0, 1.0);
        let limits = ActionLimits {
            min_dx: -0.1,
            max_dx: 0.2,
            ..ActionLimits::default()
        };
        let walls = boundary_walls(&bounds, &limits);
        let width_of = |name: &str| {
            walls
                .iter()
                .find(|(id, _)| id.as_str() == name)
                .and_then(|(_, a)| a.as_rectangle().map(|r| r.width))
        };
        assert_eq!(width_of("left_wall"), Some(0.2));
        assert_eq!(width_of("right_wall"), Some(0.4));
        let top = width_of("top_wall").unwrap();
        assert!((top - 1.6).abs() < 1e-12);
    }
}
