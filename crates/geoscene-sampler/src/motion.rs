//! The narrow-passage motion scene sampler.
//!
//! The robot starts on the left and the target region sits on the right.
//! Between them `P` obstacle columns each leave one gap. Column spacing is
//! closed-form and checked when the sampler is built, so the scene is
//! assembled in one shot and only asserted collision-free afterwards.

use std::time::Instant;

use geoscene_core::{
    ObjectAttrs, ObjectId, ObjectKind, RectangleAttrs, RobotAttrs, SceneError, SpecError, ZOrder,
};
use geoscene_geom::{CollisionOracle, GeometricOracle, Universe};
use rand::{Rng, RngCore};
use tracing::info;

use crate::builder::{StateBuilder, ROBOT_ID};
use crate::config::MotionSceneSpec;
use crate::layout::{passage_obstacles, passage_spacing, ObstacleRect, Passage};
use crate::metrics::SamplingMetrics;
use crate::pose_sampler::sample_pose;
use crate::scene::{Scene, SceneFamily, SceneSampler};

/// Name of the target region object.
pub const TARGET_REGION_ID: &str = "target_region";
/// Prefix of passage obstacle names.
pub const OBSTACLE_PREFIX: &str = "obstacle";

/// Samples narrow-passage motion scenes.
#[derive(Clone, Debug)]
pub struct MotionSampler<O = GeometricOracle> {
    spec: MotionSceneSpec,
    num_passages: usize,
    oracle: O,
    walls: StateBuilder,
}

impl MotionSampler<GeometricOracle> {
    /// A sampler for `num_passages` columns using the geometric oracle.
    pub fn new(spec: MotionSceneSpec, num_passages: usize) -> Result<Self, SceneError> {
        Self::with_oracle(spec, num_passages, GeometricOracle::new())
    }
}

impl<O: CollisionOracle> MotionSampler<O> {
    /// A sampler for `num_passages` columns answering collision queries
    /// with `oracle`.
    ///
    /// # Errors
    ///
    /// [`SceneError::InfeasibleSpecification`] if the spec is invalid or
    /// the columns would leave the robot no room to pass between them.
    pub fn with_oracle(spec: MotionSceneSpec, num_passages: usize, oracle: O) -> Result<Self, SceneError> {
        spec.validate()?;
        passage_spacing(&spec, num_passages)?;
        let walls = StateBuilder::with_walls(&spec.world, &spec.action_limits)?;
        Ok(Self {
            spec,
            num_passages,
            oracle,
            walls,
        })
    }

    /// The scene parameters.
    pub fn spec(&self) -> &MotionSceneSpec {
        &self.spec
    }

    /// The collision oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Number of obstacle columns per scene.
    pub fn num_passages(&self) -> usize {
        self.num_passages
    }

    fn obstacle(&self, rect: &ObstacleRect) -> ObjectAttrs {
        ObjectAttrs::RectangleObstacle(RectangleAttrs {
            pose: rect.pose,
            width: rect.width,
            height: rect.height,
            is_static: true,
            color: self.spec.obstacle_rgb,
            z_order: ZOrder::All,
        })
    }

    /// Region first, then `obstacle{2i}` (floor) and `obstacle{2i+1}`
    /// (ceiling) for each column left to right.
    fn layout(&self, region: RectangleAttrs, passages: &[Passage]) -> Vec<(ObjectId, ObjectAttrs)> {
        let mut layout = Vec::with_capacity(1 + 2 * passages.len());
        layout.push((
            ObjectId::new(TARGET_REGION_ID),
            ObjectAttrs::TargetRegion(region),
        ));
        for (i, p) in passages.iter().enumerate() {
            layout.push((
                ObjectId::indexed(OBSTACLE_PREFIX, 2 * i),
                self.obstacle(&p.floor),
            ));
            layout.push((
                ObjectId::indexed(OBSTACLE_PREFIX, 2 * i + 1),
                self.obstacle(&p.ceiling),
            ));
        }
        layout
    }

    /// Sample one scene.
    ///
    /// # Errors
    ///
    /// [`SceneError::InfeasibleSpecification`] with
    /// [`SpecError::SkeletonCollision`] if the robot collides with the
    /// assembled scene or the target region overlaps an obstacle.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Scene, SceneError> {
        let start = Instant::now();
        let mut metrics = SamplingMetrics::default();
        let spec = &self.spec;
        info!(passages = self.num_passages, "sampling motion scene");

        let robot_pose = sample_pose(&spec.robot_init_pose_bounds, rng);
        let region_pose = sample_pose(&spec.target_region_init_bounds, rng);
        let passages = passage_obstacles(spec, self.num_passages, rng)?;

        let robot = RobotAttrs::retracted(
            robot_pose,
            spec.robot.base_radius,
            spec.robot.arm_length,
            spec.robot.gripper_height,
            spec.robot.gripper_width,
        );
        let region = RectangleAttrs {
            pose: region_pose,
            width: spec.target_region_shape.0,
            height: spec.target_region_shape.1,
            is_static: true,
            color: spec.target_region_rgb,
            z_order: ZOrder::None,
        };
        let layout = self.layout(region, &passages);
        let state = self.walls.build(robot, &layout, &[])?;

        let robot_id = ObjectId::new(ROBOT_ID);
        metrics.oracle_queries += 1;
        if self
            .oracle
            .has_collision(&state, std::slice::from_ref(&robot_id), Universe::All, &[])
        {
            return Err(SpecError::SkeletonCollision { object: robot_id }.into());
        }

        // The region sits on no collision layer, so it is checked against
        // the obstacles by shape alone.
        let region_id = ObjectId::new(TARGET_REGION_ID);
        let obstacles: Vec<ObjectId> = layout
            .iter()
            .filter(|(_, attrs)| attrs.kind() == ObjectKind::RectangleObstacle)
            .map(|(id, _)| id.clone())
            .collect();
        metrics.oracle_queries += 1;
        if self.oracle.has_overlap(
            &state,
            std::slice::from_ref(&region_id),
            Universe::Only(&obstacles),
            &[],
        ) {
            return Err(SpecError::SkeletonCollision { object: region_id }.into());
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        info!(
            objects = state.len(),
            obstacles = state.count_kind(ObjectKind::RectangleObstacle),
            total_us = metrics.total_us,
            "sampled motion scene"
        );
        Ok(Scene { state, metrics })
    }
}

impl<O: CollisionOracle> SceneSampler for MotionSampler<O> {
    fn family(&self) -> SceneFamily {
        SceneFamily::Motion
    }

    fn sample_scene(&self, rng: &mut dyn RngCore) -> Result<Scene, SceneError> {
        self.sample(rng)
    }
}
