//! The shelf-storage scene sampler.
//!
//! A scene holds an odd number `N` of target blocks. `N / 2` start in the
//! shelf, evenly spaced and lightly rotated; the rest are rejection
//! sampled one at a time below it. The skeleton (walls, robot, shelf,
//! bookends and in-shelf blocks) is built in one shot and asserted
//! collision-free for the robot. Each outside block is then accepted only
//! when the oracle finds it clear of everything placed before it.

use std::time::Instant;

use geoscene_core::{
    ObjectAttrs, ObjectId, ObjectKind, RectangleAttrs, RobotAttrs, Rgb, SceneError, SE2Pose,
    SpecError, ZOrder,
};
use geoscene_geom::{CollisionOracle, GeometricOracle, Rectangle, Universe};
use rand::{Rng, RngCore};
use tracing::{debug, info, trace, warn};

use crate::builder::{next_block_id, StateBuilder, ROBOT_ID};
use crate::config::ShelfSceneSpec;
use crate::layout::{shelf_block_centers, shelf_pose_bounds, shelf_width};
use crate::metrics::SamplingMetrics;
use crate::pose_sampler::{sample_pose, sample_rotations};
use crate::scene::{Scene, SceneFamily, SceneSampler};

/// Name of the shelf object.
pub const SHELF_ID: &str = "shelf";
/// Name of the obstacle filling the row left of the shelf.
pub const LEFT_BOOKEND_ID: &str = "shelf_left_bookend";
/// Name of the obstacle filling the row right of the shelf.
pub const RIGHT_BOOKEND_ID: &str = "shelf_right_bookend";

fn block_attrs(spec: &ShelfSceneSpec, pose: SE2Pose) -> RectangleAttrs {
    RectangleAttrs {
        pose,
        width: spec.target_block_shape.0,
        height: spec.target_block_shape.1,
        is_static: false,
        color: spec.target_block_rgb,
        z_order: ZOrder::Surface,
    }
}

fn row_rect(x: f64, y: f64, width: f64, height: f64, color: Rgb, z_order: ZOrder) -> RectangleAttrs {
    RectangleAttrs {
        pose: SE2Pose::new(x, y, 0.0),
        width,
        height,
        is_static: true,
        color,
        z_order,
    }
}

/// Samples shelf-storage scenes.
///
/// Construction validates the spec and every count-dependent invariant,
/// so [`sample`](Self::sample) can only fail by exhausting its attempt
/// budget or by the post-hoc skeleton assertion.
#[derive(Clone, Debug)]
pub struct ShelfStorageSampler<O = GeometricOracle> {
    spec: ShelfSceneSpec,
    num_blocks: usize,
    shelf_width: f64,
    oracle: O,
    walls: StateBuilder,
}

impl ShelfStorageSampler<GeometricOracle> {
    /// A sampler for `num_blocks` blocks using the geometric oracle.
    pub fn new(spec: ShelfSceneSpec, num_blocks: usize) -> Result<Self, SceneError> {
        Self::with_oracle(spec, num_blocks, GeometricOracle::new())
    }
}

impl<O: CollisionOracle> ShelfStorageSampler<O> {
    /// A sampler for `num_blocks` blocks answering collision queries with
    /// `oracle`.
    ///
    /// # Errors
    ///
    /// [`SceneError::InfeasibleSpecification`] if the spec is invalid,
    /// `num_blocks` is even, or the shelf for `num_blocks / 2` blocks
    /// cannot fit the world or leave room to stack.
    pub fn with_oracle(spec: ShelfSceneSpec, num_blocks: usize, oracle: O) -> Result<Self, SceneError> {
        spec.validate()?;
        if num_blocks % 2 == 0 {
            return Err(SpecError::EvenBlockCount { num_blocks }.into());
        }
        let shelf_width = shelf_width(&spec, num_blocks / 2)?;
        let walls = StateBuilder::with_walls(&spec.world, &spec.action_limits)?;
        Ok(Self {
            spec,
            num_blocks,
            shelf_width,
            oracle,
            walls,
        })
    }

    /// The scene parameters.
    pub fn spec(&self) -> &ShelfSceneSpec {
        &self.spec
    }

    /// The collision oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Total number of target blocks per scene.
    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    /// Blocks that start in the shelf.
    pub fn num_shelf_blocks(&self) -> usize {
        self.num_blocks / 2
    }

    /// Blocks that start outside the shelf.
    pub fn num_outside_blocks(&self) -> usize {
        self.num_blocks - self.num_shelf_blocks()
    }

    /// Width of the shelf in every scene this sampler produces.
    pub fn shelf_width(&self) -> f64 {
        self.shelf_width
    }

    fn layout(&self, shelf_pose: SE2Pose) -> Vec<(ObjectId, ObjectAttrs)> {
        let spec = &self.spec;
        let right_x = shelf_pose.x + self.shelf_width;
        vec![
            (
                ObjectId::new(SHELF_ID),
                ObjectAttrs::Shelf(row_rect(
                    shelf_pose.x,
                    shelf_pose.y,
                    self.shelf_width,
                    spec.shelf_height,
                    spec.shelf_rgb,
                    ZOrder::Floor,
                )),
            ),
            (
                ObjectId::new(LEFT_BOOKEND_ID),
                ObjectAttrs::RectangleObstacle(row_rect(
                    spec.world.min_x,
                    shelf_pose.y,
                    shelf_pose.x - spec.world.min_x,
                    spec.shelf_height,
                    Rgb::BLACK,
                    ZOrder::All,
                )),
            ),
            (
                ObjectId::new(RIGHT_BOOKEND_ID),
                ObjectAttrs::RectangleObstacle(row_rect(
                    right_x,
                    shelf_pose.y,
                    spec.world.max_x - right_x,
                    spec.shelf_height,
                    Rgb::BLACK,
                    ZOrder::All,
                )),
            ),
        ]
    }

    fn in_shelf_blocks<R: Rng + ?Sized>(
        &self,
        shelf_pose: &SE2Pose,
        rng: &mut R,
    ) -> Result<Vec<RectangleAttrs>, SpecError> {
        let n = self.num_shelf_blocks();
        let rotations = sample_rotations(rng, self.spec.target_block_in_shelf_rotation_bounds, n);
        let centers = shelf_block_centers(&self.spec, n, shelf_pose)?;
        let (w, h) = self.spec.target_block_shape;
        Ok(centers
            .into_iter()
            .zip(rotations)
            .map(|((cx, cy), rot)| {
                let rect = Rectangle::from_center(cx, cy, w, h, rot);
                block_attrs(&self.spec, SE2Pose::new(rect.x, rect.y, rect.theta))
            })
            .collect())
    }

    /// Sample one scene.
    ///
    /// # Errors
    ///
    /// - [`SceneError::ExhaustedAttempts`] naming the first outside block
    ///   for which no collision-free pose was found within
    ///   `max_init_sampling_attempts` draws.
    /// - [`SceneError::InfeasibleSpecification`] with
    ///   [`SpecError::SkeletonCollision`] if the robot overlaps the
    ///   skeleton.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Scene, SceneError> {
        let start = Instant::now();
        let mut metrics = SamplingMetrics::default();
        let spec = &self.spec;
        info!(
            num_blocks = self.num_blocks,
            shelf_blocks = self.num_shelf_blocks(),
            "sampling shelf-storage scene"
        );

        let robot_pose = sample_pose(&spec.robot_init_pose_bounds, rng);
        let shelf_bounds = shelf_pose_bounds(spec, self.num_shelf_blocks())?;
        let shelf_pose = sample_pose(&shelf_bounds, rng);
        let in_shelf = self.in_shelf_blocks(&shelf_pose, rng)?;

        let robot = RobotAttrs::retracted(
            robot_pose,
            spec.robot.base_radius,
            spec.robot.arm_length,
            spec.robot.gripper_height,
            spec.robot.gripper_width,
        );
        let skeleton = self.walls.build(robot, &self.layout(shelf_pose), &in_shelf)?;

        let robot_id = ObjectId::new(ROBOT_ID);
        metrics.oracle_queries += 1;
        if self
            .oracle
            .has_collision(&skeleton, std::slice::from_ref(&robot_id), Universe::All, &[])
        {
            return Err(SpecError::SkeletonCollision { object: robot_id }.into());
        }

        let mut current = StateBuilder::from_state(skeleton);
        let budget = spec.max_init_sampling_attempts;
        for _ in 0..self.num_outside_blocks() {
            let id = next_block_id(current.base());
            let mut accepted = None;
            for attempt in 1..=budget {
                let pose = sample_pose(&spec.target_block_out_of_shelf_pose_bounds, rng);
                if !spec.world.strictly_contains(pose.x, pose.y) {
                    metrics.boundary_rejections += 1;
                    trace!(object = %id, attempt, "candidate outside world bounds");
                    continue;
                }
                let candidate = current.extend(&[block_attrs(spec, pose)])?;
                metrics.oracle_queries += 1;
                if self
                    .oracle
                    .has_collision(&candidate, std::slice::from_ref(&id), Universe::All, &[])
                {
                    metrics.collision_rejections += 1;
                    trace!(object = %id, attempt, "candidate collides");
                    continue;
                }
                accepted = Some((candidate, attempt));
                break;
            }

            let Some((state, attempts)) = accepted else {
                warn!(object = %id, attempts = budget, "exhausted sampling attempts");
                return Err(SceneError::ExhaustedAttempts {
                    object: id,
                    attempts: budget,
                });
            };
            debug!(object = %id, attempts, "placed block");
            metrics.attempts.push((id, attempts));
            current = StateBuilder::from_state(state);
        }

        let state = current.into_state();
        metrics.total_us = start.elapsed().as_micros() as u64;
        info!(
            objects = state.len(),
            blocks = state.count_kind(ObjectKind::TargetBlock),
            attempts = metrics.total_attempts(),
            total_us = metrics.total_us,
            "sampled shelf-storage scene"
        );
        Ok(Scene { state, metrics })
    }
}

impl<O: CollisionOracle> SceneSampler for ShelfStorageSampler<O> {
    fn family(&self) -> SceneFamily {
        SceneFamily::ShelfStorage
    }

    fn sample_scene(&self, rng: &mut dyn RngCore) -> Result<Scene, SceneError> {
        self.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscene_core::PoseBounds;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn even_block_count_is_infeasible() {
        let err = ShelfStorageSampler::new(ShelfSceneSpec::default(), 4).unwrap_err();
        assert_eq!(
            err,
            SceneError::InfeasibleSpecification(SpecError::EvenBlockCount { num_blocks: 4 })
        );
    }

    #[test]
    fn block_split_rounds_shelf_count_down() {
        let sampler = ShelfStorageSampler::new(ShelfSceneSpec::default(), 5).unwrap();
        assert_eq!(sampler.num_shelf_blocks(), 2);
        assert_eq!(sampler.num_outside_blocks(), 3);
        assert_eq!(sampler.family(), SceneFamily::ShelfStorage);
    }

    #[test]
    fn single_block_scene_has_empty_shelf() {
        let sampler = ShelfStorageSampler::new(ShelfSceneSpec::default(), 1).unwrap();
        let scene = sampler.sample(&mut ChaCha8Rng::seed_from_u64(0)).unwrap();
        assert_eq!(scene.state.count_kind(ObjectKind::TargetBlock), 1);
        assert!(scene.state.contains(&"block0".into()));
        assert_eq!(scene.metrics.attempts.len(), 1);
    }

    #[test]
    fn bookends_fill_the_shelf_row() {
        let sampler = ShelfStorageSampler::new(ShelfSceneSpec::default(), 3).unwrap();
        let scene = sampler.sample(&mut ChaCha8Rng::seed_from_u64(11)).unwrap();
        let width_of = |name: &str| {
            scene
                .state
                .get(&name.into())
                .and_then(ObjectAttrs::as_rectangle)
                .map(|r| r.width)
                .unwrap()
        };
        let total = width_of(LEFT_BOOKEND_ID) + width_of(SHELF_ID) + width_of(RIGHT_BOOKEND_ID);
        assert!((total - 5.0).abs() < 1e-9);
    }

    #[test]
    fn robot_on_shelf_row_fails_skeleton_assertion() {
        let spec = ShelfSceneSpec::default();
        // Base overlaps the right wall.
        let pinned = SE2Pose::new(spec.world.max_x - 0.1, spec.shelf_y + 0.1, 0.0);
        let spec = spec.with_robot_init_pose_bounds(PoseBounds::point(pinned));
        let sampler = ShelfStorageSampler::new(spec, 3).unwrap();
        let err = sampler.sample(&mut ChaCha8Rng::seed_from_u64(0)).unwrap_err();
        assert_eq!(
            err,
            SceneError::InfeasibleSpecification(SpecError::SkeletonCollision {
                object: "robot".into()
            })
        );
    }
}
