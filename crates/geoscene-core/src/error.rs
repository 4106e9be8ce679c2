//! Error types for scene construction.
//!
//! Organized by layer: [`StateError`] for world-state bookkeeping,
//! [`SpecError`] for infeasible or malformed scene specifications, and
//! [`SceneError`] for the top-level sampling call, which wraps both.

use std::error::Error;
use std::fmt;

use crate::id::{ObjectId, ObjectKind};

/// Errors from building or querying a [`WorldState`](crate::WorldState).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// An object with this identity was already inserted.
    DuplicateObject {
        /// The repeated identity.
        id: ObjectId,
    },
    /// No object with this identity exists.
    MissingObject {
        /// The identity that was looked up.
        id: ObjectId,
    },
    /// The state holds no object of this kind.
    MissingKind {
        /// The kind that was looked up.
        kind: ObjectKind,
    },
    /// The object exists but has a different kind.
    WrongKind {
        /// The object that was looked up.
        id: ObjectId,
        /// The kind the caller required.
        expected: ObjectKind,
        /// The kind actually stored.
        found: ObjectKind,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateObject { id } => write!(f, "object '{id}' inserted twice"),
            Self::MissingObject { id } => write!(f, "no object named '{id}'"),
            Self::MissingKind { kind } => write!(f, "no object of kind {kind}"),
            Self::WrongKind {
                id,
                expected,
                found,
            } => write!(f, "object '{id}' is a {found}, expected a {expected}"),
        }
    }
}

impl Error for StateError {}

/// Closed-form geometric invariants or configuration values that cannot
/// be satisfied.
///
/// Always a configuration bug: retrying the same inputs cannot succeed.
#[derive(Clone, Debug, PartialEq)]
pub enum SpecError {
    /// The shelf scene needs an odd total number of blocks.
    EvenBlockCount {
        /// The requested count.
        num_blocks: usize,
    },
    /// The shelf is wider than the world.
    ShelfTooWide {
        /// Computed shelf width.
        shelf_width: f64,
        /// Available world width.
        world_width: f64,
    },
    /// The shelf is too narrow for the in-shelf blocks plus one to stand
    /// upright side by side.
    ShelfTooNarrowForStacking {
        /// Computed shelf width.
        shelf_width: f64,
        /// Width that must be strictly exceeded.
        required: f64,
    },
    /// In-shelf block placement requires an unrotated shelf.
    ShelfRotated {
        /// The shelf orientation that was supplied.
        theta: f64,
    },
    /// Adjacent passage columns are too close for the robot base to pass.
    PassagesTooClose {
        /// Horizontal clearance between adjacent columns.
        spacing: f64,
        /// Clearance that must be strictly exceeded (the base diameter).
        required: f64,
    },
    /// A sampling range or world extent is empty or not finite.
    InvalidBounds {
        /// Which bounds were rejected.
        what: &'static str,
        /// Description of the problem.
        reason: String,
    },
    /// A scalar parameter is out of range.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },
    /// A deterministically placed object collides with the skeleton even
    /// though the layout geometry should make that impossible.
    SkeletonCollision {
        /// The object that failed the post-hoc check.
        object: ObjectId,
    },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenBlockCount { num_blocks } => {
                write!(f, "number of blocks must be odd, got {num_blocks}")
            }
            Self::ShelfTooWide {
                shelf_width,
                world_width,
            } => write!(
                f,
                "shelf width {shelf_width} exceeds world width {world_width}"
            ),
            Self::ShelfTooNarrowForStacking {
                shelf_width,
                required,
            } => write!(
                f,
                "shelf width {shelf_width} must exceed {required} to allow vertical stacking"
            ),
            Self::ShelfRotated { theta } => {
                write!(f, "shelf must be unrotated, got theta {theta}")
            }
            Self::PassagesTooClose { spacing, required } => write!(
                f,
                "passage spacing {spacing} must exceed robot base diameter {required}"
            ),
            Self::InvalidBounds { what, reason } => write!(f, "invalid {what} bounds: {reason}"),
            Self::InvalidParameter { name, reason } => write!(f, "invalid {name}: {reason}"),
            Self::SkeletonCollision { object } => {
                write!(f, "'{object}' collides with the scene skeleton")
            }
        }
    }
}

impl Error for SpecError {}

/// Errors from a complete scene-sampling call.
///
/// Every variant aborts construction; no partial state is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    /// Rejection sampling found no collision-free pose for `object`
    /// within the attempt budget.
    ExhaustedAttempts {
        /// The object being placed.
        object: ObjectId,
        /// Number of candidates drawn.
        attempts: usize,
    },
    /// The specification violates a closed-form geometric invariant.
    InfeasibleSpecification(SpecError),
    /// World-state bookkeeping failed.
    State(StateError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExhaustedAttempts { object, attempts } => write!(
                f,
                "no collision-free pose for '{object}' after {attempts} attempts"
            ),
            Self::InfeasibleSpecification(e) => write!(f, "infeasible specification: {e}"),
            Self::State(e) => write!(f, "world state: {e}"),
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InfeasibleSpecification(e) => Some(e),
            Self::State(e) => Some(e),
            Self::ExhaustedAttempts { .. } => None,
        }
    }
}

impl From<SpecError> for SceneError {
    fn from(e: SpecError) -> Self {
        Self::InfeasibleSpecification(e)
    }
}

impl From<StateError> for SceneError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_attempts_names_object_and_count() {
        let err = SceneError::ExhaustedAttempts {
            object: ObjectId::new("block2"),
            attempts: 10_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("block2"));
        assert!(msg.contains("10000"));
        assert!(err.source().is_none());
    }

    #[test]
    fn spec_error_converts_and_chains() {
        let err: SceneError = SpecError::EvenBlockCount { num_blocks: 4 }.into();
        assert!(matches!(
            err,
            SceneError::InfeasibleSpecification(SpecError::EvenBlockCount { num_blocks: 4 })
        ));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("number of blocks must be odd, got 4"));
    }

    #[test]
    fn state_error_display() {
        let err = StateError::WrongKind {
            id: ObjectId::new("robot"),
            expected: ObjectKind::Robot,
            found: ObjectKind::Wall,
        };
        assert_eq!(err.to_string(), "object 'robot' is a wall, expected a robot");
    }
}
