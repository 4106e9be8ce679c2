//! Closed-form scene geometry.
//!
//! Shelf sizing and in-shelf block placement are pure functions of the
//! spec and the block count. Passage obstacles draw each gap's position
//! and height but compute the columns themselves in closed form.
//!
//! Violated invariants return [`SpecError`]: they are configuration bugs,
//! not sampling failures, and are detected before any randomness is used.

use geoscene_core::{PoseBounds, SE2Pose, SpecError};
use rand::Rng;
use tracing::debug;

use crate::config::{MotionSceneSpec, ShelfSceneSpec};
use crate::pose_sampler::sample_uniform;

/// Tolerance for treating the shelf orientation as zero.
const SHELF_THETA_TOL: f64 = 1e-8;

// ── Shelf ──────────────────────────────────────────────────────────

/// Width of the shelf holding `num_shelf_blocks` blocks.
///
/// Each block is allotted its major dimension plus the pad; an empty
/// shelf is sized for one block. The result must fit in the world and
/// must strictly exceed `(num_shelf_blocks + 1) × block_height`, so one
/// more block can still be stood upright alongside the others.
pub fn shelf_width(spec: &ShelfSceneSpec, num_shelf_blocks: usize) -> Result<f64, SpecError> {
    let slot = spec.block_major() + spec.shelf_width_pad;
    let width = slot * num_shelf_blocks.max(1) as f64;

    let world_width = spec.world.width();
    if width > world_width {
        return Err(SpecError::ShelfTooWide {
            shelf_width: width,
            world_width,
        });
    }
    let required = (num_shelf_blocks + 1) as f64 * spec.target_block_shape.1;
    if width <= required {
        return Err(SpecError::ShelfTooNarrowForStacking {
            shelf_width: width,
            required,
        });
    }
    Ok(width)
}

/// Range of shelf poses: anywhere along the shelf row that keeps the
/// whole shelf inside the world, unrotated.
pub fn shelf_pose_bounds(
    spec: &ShelfSceneSpec,
    num_shelf_blocks: usize,
) -> Result<PoseBounds, SpecError> {
    let width = shelf_width(spec, num_shelf_blocks)?;
    Ok(PoseBounds::new(
        SE2Pose::new(spec.world.min_x, spec.shelf_y, 0.0),
        SE2Pose::new(spec.world.max_x - width, spec.shelf_y, 0.0),
    ))
}

/// Centres of the blocks that start in the shelf.
///
/// Blocks are spread evenly, endpoints included, between
/// `shelf_x + half_pad` and `shelf_x + width - half_pad`, where
/// `half_pad = (pad + block_width) / 2`; a single block sits at the left
/// end. All share `y = shelf_y + 2 × block_height`.
pub fn shelf_block_centers(
    spec: &ShelfSceneSpec,
    num_shelf_blocks: usize,
    shelf_pose: &SE2Pose,
) -> Result<Vec<(f64, f64)>, SpecError> {
    if shelf_pose.theta.abs() > SHELF_THETA_TOL {
        return Err(SpecError::ShelfRotated {
            theta: shelf_pose.theta,
        });
    }
    let width = shelf_width(spec, num_shelf_blocks)?;
    let half_pad = (spec.shelf_width_pad + spec.target_block_shape.0) / 2.0;
    let min_x = shelf_pose.x + half_pad;
    let max_x = shelf_pose.x + width - half_pad;
    let y = shelf_pose.y + 2.0 * spec.target_block_shape.1;

    let xs: Vec<f64> = match num_shelf_blocks {
        0 => Vec::new(),
        1 => vec![min_x],
        n => {
            let step = (max_x - min_x) / (n - 1) as f64;
            (0..n).map(|i| min_x + i as f64 * step).collect()
        }
    };
    Ok(xs.into_iter().map(|x| (x, y)).collect())
}

// ── Passages ───────────────────────────────────────────────────────

/// An axis-aligned obstacle rectangle anchored at its lower-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleRect {
    /// Corner pose (always unrotated).
    pub pose: SE2Pose,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// One obstacle column with a single gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Passage {
    /// Bottom edge of the gap.
    pub gap_y: f64,
    /// Height of the gap as drawn.
    pub gap_height: f64,
    /// Obstacle from the world floor up to the gap.
    pub floor: ObstacleRect,
    /// Obstacle from the top of the gap up to the world ceiling.
    pub ceiling: ObstacleRect,
}

/// Horizontal clearance between adjacent obstacle columns.
///
/// For `P >= 2` columns spread evenly over `[obstacle_min_x,
/// obstacle_max_x]` this is `(max_x - min_x - P × width) / (P - 1)`. A lone
/// column's clearance is the free span to its right. With no passages
/// there is nothing to check and `None` is returned.
///
/// Returns [`SpecError::PassagesTooClose`] unless the clearance strictly
/// exceeds the robot base diameter.
pub fn passage_spacing(
    spec: &MotionSceneSpec,
    num_passages: usize,
) -> Result<Option<f64>, SpecError> {
    let span = spec.obstacle_max_x - spec.obstacle_min_x;
    let spacing = match num_passages {
        0 => return Ok(None),
        1 => span - spec.obstacle_width,
        n => (span - n as f64 * spec.obstacle_width) / (n - 1) as f64,
    };
    let required = 2.0 * spec.robot.base_radius;
    if spacing <= required {
        return Err(SpecError::PassagesTooClose { spacing, required });
    }
    Ok(Some(spacing))
}

/// Left edges of the obstacle columns.
pub fn passage_columns(spec: &MotionSceneSpec, num_passages: usize) -> Result<Vec<f64>, SpecError> {
    let spacing = passage_spacing(spec, num_passages)?.unwrap_or(0.0);
    let pitch = spec.obstacle_width + spacing;
    Ok((0..num_passages)
        .map(|i| spec.obstacle_min_x + i as f64 * pitch)
        .collect())
}

/// Lay out `num_passages` obstacle columns, drawing each gap.
///
/// For each column the gap's bottom edge is drawn from
/// `obstacle_passage_y_bounds`, then its height from
/// `obstacle_passage_height_bounds`. A gap that reaches past the ceiling
/// leaves a zero-height ceiling obstacle at the top of the world.
pub fn passage_obstacles<R: Rng + ?Sized>(
    spec: &MotionSceneSpec,
    num_passages: usize,
    rng: &mut R,
) -> Result<Vec<Passage>, SpecError> {
    let columns = passage_columns(spec, num_passages)?;
    let (floor_y, ceiling_y) = (spec.world.min_y, spec.world.max_y);

    let passages: Vec<Passage> = columns
        .into_iter()
        .map(|x| {
            let (y_lo, y_hi) = spec.obstacle_passage_y_bounds;
            let gap_y = sample_uniform(rng, y_lo, y_hi);
            let (h_lo, h_hi) = spec.obstacle_passage_height_bounds;
            let gap_height = sample_uniform(rng, h_lo, h_hi);

            let floor = ObstacleRect {
                pose: SE2Pose::new(x, floor_y, 0.0),
                width: spec.obstacle_width,
                height: gap_y - floor_y,
            };
            let top = (gap_y + gap_height).min(ceiling_y);
            let ceiling = ObstacleRect {
                pose: SE2Pose::new(x, top, 0.0),
                width: spec.obstacle_width,
                height: ceiling_y - top,
            };
            Passage {
                gap_y,
                gap_height,
                floor,
                ceiling,
            }
        })
        .collect();

    debug!(passages = passages.len(), "laid out passage obstacles");
    Ok(passages)
}
