//! Scene specifications and their validation.
//!
//! [`ShelfSceneSpec`] and [`MotionSceneSpec`] are immutable numeric
//! descriptions of a scene family: world bounds, shapes, colours and the
//! pose ranges the samplers draw from. `Default` reproduces the reference
//! environments; [`validate()`](ShelfSceneSpec::validate) checks every
//! range before a sampler accepts the spec.

use std::f64::consts::PI;

use geoscene_core::{ActionLimits, PoseBounds, Rgb, SE2Pose, SpecError, WorldBounds};

/// Colour of target blocks.
pub const TARGET_BLOCK_RGB: Rgb = Rgb(0.0, 0.3, 1.0);

fn check_positive(name: &'static str, value: f64) -> Result<(), SpecError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpecError::InvalidParameter {
            name,
            reason: format!("must be finite and positive, got {value}"),
        });
    }
    Ok(())
}

fn check_interval(name: &'static str, (lo, hi): (f64, f64)) -> Result<(), SpecError> {
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(SpecError::InvalidBounds {
            what: name,
            reason: format!("[{lo}, {hi}] is empty or not finite"),
        });
    }
    Ok(())
}

/// Reject pose ranges that reach the world boundary or beyond.
fn check_inside_world(
    what: &'static str,
    bounds: &PoseBounds,
    world: &WorldBounds,
) -> Result<(), SpecError> {
    let (lo, hi) = (bounds.lo, bounds.hi);
    if !world.strictly_contains(lo.x, lo.y) || !world.strictly_contains(hi.x, hi.y) {
        return Err(SpecError::InvalidBounds {
            what,
            reason: format!(
                "x [{}, {}] and y [{}, {}] are not strictly inside the world",
                lo.x, hi.x, lo.y, hi.y
            ),
        });
    }
    Ok(())
}

// ── RobotSpec ──────────────────────────────────────────────────────

/// Shape of the mobile-base robot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobotSpec {
    /// Radius of the circular base.
    pub base_radius: f64,
    /// Maximum arm extension.
    pub arm_length: f64,
    /// Gripper extent perpendicular to the arm.
    pub gripper_height: f64,
    /// Gripper extent along the arm.
    pub gripper_width: f64,
}

impl RobotSpec {
    /// Check that every dimension is positive and the arm can at least
    /// reach the rim of the base.
    pub fn validate(&self) -> Result<(), SpecError> {
        check_positive("robot.base_radius", self.base_radius)?;
        check_positive("robot.arm_length", self.arm_length)?;
        check_positive("robot.gripper_height", self.gripper_height)?;
        check_positive("robot.gripper_width", self.gripper_width)?;
        if self.arm_length < self.base_radius {
            return Err(SpecError::InvalidParameter {
                name: "robot.arm_length",
                reason: format!(
                    "{} is shorter than the base radius {}",
                    self.arm_length, self.base_radius
                ),
            });
        }
        Ok(())
    }
}

// ── ShelfSceneSpec ─────────────────────────────────────────────────

/// Parameters of the shelf-storage scene.
///
/// The shelf occupies a horizontal row at the top of the world, flanked
/// by two bookends that fill the rest of the row. Some blocks start in
/// the shelf and the rest are scattered below it.
#[derive(Clone, Debug, PartialEq)]
pub struct ShelfSceneSpec {
    /// World extents.
    pub world: WorldBounds,
    /// Robot action limits (size the boundary walls).
    pub action_limits: ActionLimits,
    /// Robot shape.
    pub robot: RobotSpec,
    /// Range of the robot's initial pose.
    pub robot_init_pose_bounds: PoseBounds,
    /// Shelf colour.
    pub shelf_rgb: Rgb,
    /// Height of the shelf row.
    pub shelf_height: f64,
    /// Horizontal padding allotted to each in-shelf block.
    pub shelf_width_pad: f64,
    /// Bottom edge of the shelf row.
    pub shelf_y: f64,
    /// Block colour.
    pub target_block_rgb: Rgb,
    /// Rotation perturbation range for blocks that start in the shelf.
    pub target_block_in_shelf_rotation_bounds: (f64, f64),
    /// Pose range for blocks that start outside the shelf.
    pub target_block_out_of_shelf_pose_bounds: PoseBounds,
    /// Block `(width, height)`.
    pub target_block_shape: (f64, f64),
    /// Rejection-sampling budget per outside block.
    pub max_init_sampling_attempts: usize,
}

impl Default for ShelfSceneSpec {
    fn default() -> Self {
        let world = WorldBounds::new(0.0, 5.0, 0.0, 3.0);
        let shelf_height = world.height() / 8.0;
        let shelf_y = world.max_y - shelf_height;
        let robot = RobotSpec {
            base_radius: 0.2,
            // Extra long so the arm reaches into the shelf.
            arm_length: 0.8,
            gripper_height: 0.14,
            gripper_width: 0.02,
        };
        let margin = 4.0 * robot.base_radius;
        // Robot stays below the shelf row.
        let robot_init_pose_bounds = PoseBounds::new(
            SE2Pose::new(world.min_x + margin, world.min_y + margin, -PI),
            SE2Pose::new(world.max_x - margin, shelf_y - margin, PI),
        );
        Self {
            world,
            action_limits: ActionLimits::default(),
            robot,
            robot_init_pose_bounds,
            shelf_rgb: Rgb::PURPLE,
            shelf_height,
            shelf_width_pad: shelf_height / 10.0,
            shelf_y,
            target_block_rgb: TARGET_BLOCK_RGB,
            target_block_in_shelf_rotation_bounds: (-PI / 16.0, PI / 16.0),
            target_block_out_of_shelf_pose_bounds: robot_init_pose_bounds,
            target_block_shape: (2.0 * robot.gripper_height, 2.0 * robot.gripper_width),
            max_init_sampling_attempts: 10_000,
        }
    }
}

impl ShelfSceneSpec {
    /// Replace the per-block attempt budget.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_init_sampling_attempts = attempts;
        self
    }

    /// Replace the robot's initial pose range.
    pub fn with_robot_init_pose_bounds(mut self, bounds: PoseBounds) -> Self {
        self.robot_init_pose_bounds = bounds;
        self
    }

    /// Replace the pose range of blocks that start outside the shelf.
    pub fn with_out_of_shelf_pose_bounds(mut self, bounds: PoseBounds) -> Self {
        self.target_block_out_of_shelf_pose_bounds = bounds;
        self
    }

    /// Replace the block shape.
    pub fn with_block_shape(mut self, width: f64, height: f64) -> Self {
        self.target_block_shape = (width, height);
        self
    }

    /// Larger of the two block dimensions.
    pub fn block_major(&self) -> f64 {
        self.target_block_shape.0.max(self.target_block_shape.1)
    }

    /// Validate every parameter.
    ///
    /// Count-dependent invariants (shelf width) are checked by
    /// [`layout::shelf_width`](crate::layout::shelf_width) once the block
    /// count is known.
    pub fn validate(&self) -> Result<(), SpecError> {
        self.world.validate()?;
        self.action_limits.validate()?;
        self.robot.validate()?;
        self.robot_init_pose_bounds.validate("robot init pose")?;
        check_inside_world("robot init pose", &self.robot_init_pose_bounds, &self.world)?;
        self.target_block_out_of_shelf_pose_bounds
            .validate("out-of-shelf block pose")?;
        check_interval(
            "in-shelf block rotation",
            self.target_block_in_shelf_rotation_bounds,
        )?;
        check_positive("target_block_shape.width", self.target_block_shape.0)?;
        check_positive("target_block_shape.height", self.target_block_shape.1)?;
        check_positive("shelf_height", self.shelf_height)?;
        if !self.shelf_width_pad.is_finite() || self.shelf_width_pad < 0.0 {
            return Err(SpecError::InvalidParameter {
                name: "shelf_width_pad",
                reason: format!("must be finite and non-negative, got {}", self.shelf_width_pad),
            });
        }
        // The shelf spans the row from wall to wall, so only its row height
        // is free; the row's bottom edge must clear the world floor.
        let shelf_top = self.shelf_y + self.shelf_height;
        if self.shelf_y <= self.world.min_y || shelf_top > self.world.max_y + 1e-9 {
            return Err(SpecError::InvalidParameter {
                name: "shelf_y",
                reason: format!(
                    "shelf row [{}, {shelf_top}] leaves the world [{}, {}]",
                    self.shelf_y, self.world.min_y, self.world.max_y
                ),
            });
        }
        if self.max_init_sampling_attempts == 0 {
            return Err(SpecError::InvalidParameter {
                name: "max_init_sampling_attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ── MotionSceneSpec ────────────────────────────────────────────────

/// Parameters of the narrow-passage motion scene.
///
/// The robot starts on the left, the target region sits on the right,
/// and between them a band of vertical obstacle columns each leaves one
/// randomly placed gap.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionSceneSpec {
    /// World extents.
    pub world: WorldBounds,
    /// Robot action limits (size the boundary walls).
    pub action_limits: ActionLimits,
    /// Robot shape.
    pub robot: RobotSpec,
    /// Range of the robot's initial pose.
    pub robot_init_pose_bounds: PoseBounds,
    /// Target region colour.
    pub target_region_rgb: Rgb,
    /// Range of the target region's pose.
    pub target_region_init_bounds: PoseBounds,
    /// Target region `(width, height)`.
    pub target_region_shape: (f64, f64),
    /// Obstacle colour.
    pub obstacle_rgb: Rgb,
    /// Width of every obstacle column.
    pub obstacle_width: f64,
    /// Left edge of the first column.
    pub obstacle_min_x: f64,
    /// Right end of the band; with two or more columns the last one ends
    /// here.
    pub obstacle_max_x: f64,
    /// Range of each gap's height.
    pub obstacle_passage_height_bounds: (f64, f64),
    /// Range of each gap's bottom edge.
    pub obstacle_passage_y_bounds: (f64, f64),
}

impl Default for MotionSceneSpec {
    fn default() -> Self {
        let world = WorldBounds::new(0.0, 2.5, 0.0, 2.5);
        let robot = RobotSpec {
            base_radius: 0.1,
            arm_length: 0.2,
            gripper_height: 0.07,
            gripper_width: 0.01,
        };
        let r = robot.base_radius;
        let robot_init_pose_bounds = PoseBounds::new(
            SE2Pose::new(world.min_x + 2.5 * r, world.min_y + 3.0 * r, -PI),
            SE2Pose::new(world.min_x + 3.0 * r, world.max_y - 3.0 * r, PI),
        );
        let target_region_init_bounds = PoseBounds::new(
            SE2Pose::new(world.max_x - 3.0 * r, world.min_y + 3.0 * r, 0.0),
            SE2Pose::new(world.max_x - 2.5 * r, world.max_y - 3.0 * r, 0.0),
        );
        let obstacle_width = r / 10.0;
        Self {
            world,
            action_limits: ActionLimits::default(),
            robot,
            robot_init_pose_bounds,
            target_region_rgb: Rgb::PURPLE,
            target_region_init_bounds,
            target_region_shape: (2.5 * r, 2.5 * r),
            obstacle_rgb: Rgb::BLACK,
            obstacle_width,
            obstacle_min_x: robot_init_pose_bounds.hi.x + 2.0 * r,
            obstacle_max_x: target_region_init_bounds.lo.x - (2.0 * r + obstacle_width),
            obstacle_passage_height_bounds: (2.5 * r, 4.0 * r),
            obstacle_passage_y_bounds: (world.min_y + 2.0 * r, world.max_y - 2.0 * r),
        }
    }
}

impl MotionSceneSpec {
    /// Replace the robot's initial pose range.
    pub fn with_robot_init_pose_bounds(mut self, bounds: PoseBounds) -> Self {
        self.robot_init_pose_bounds = bounds;
        self
    }

    /// Replace the target region's pose range.
    pub fn with_target_region_init_bounds(mut self, bounds: PoseBounds) -> Self {
        self.target_region_init_bounds = bounds;
        self
    }

    /// Replace the horizontal extent of the obstacle band.
    pub fn with_obstacle_band(mut self, min_x: f64, max_x: f64) -> Self {
        self.obstacle_min_x = min_x;
        self.obstacle_max_x = max_x;
        self
    }

    /// Validate every parameter.
    ///
    /// Passage spacing depends on the passage count and is checked by
    /// [`layout::passage_spacing`](crate::layout::passage_spacing).
    pub fn validate(&self) -> Result<(), SpecError> {
        self.world.validate()?;
        self.action_limits.validate()?;
        self.robot.validate()?;
        self.robot_init_pose_bounds.validate("robot init pose")?;
        self.target_region_init_bounds.validate("target region pose")?;
        check_inside_world("robot init pose", &self.robot_init_pose_bounds, &self.world)?;
        check_inside_world("target region pose", &self.target_region_init_bounds, &self.world)?;
        check_positive("target_region_shape.width", self.target_region_shape.0)?;
        check_positive("target_region_shape.height", self.target_region_shape.1)?;
        check_positive("obstacle_width", self.obstacle_width)?;
        check_interval("obstacle band", (self.obstacle_min_x, self.obstacle_max_x))?;
        check_interval("passage height", self.obstacle_passage_height_bounds)?;
        check_interval("passage y", self.obstacle_passage_y_bounds)?;
        if self.obstacle_passage_height_bounds.0 <= 0.0 {
            return Err(SpecError::InvalidParameter {
                name: "obstacle_passage_height_bounds",
                reason: "passage height must be positive".to_string(),
            });
        }
        let (gap_lo, gap_hi) = self.obstacle_passage_y_bounds;
        if gap_lo < self.world.min_y || gap_hi > self.world.max_y {
            return Err(SpecError::InvalidBounds {
                what: "passage y",
                reason: format!(
                    "[{gap_lo}, {gap_hi}] leaves the world [{}, {}]",
                    self.world.min_y, self.world.max_y
                ),
            });
        }
        Ok(())
    }
}
