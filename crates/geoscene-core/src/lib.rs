//! Core types for the geoscene scene generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the geometry oracle and the samplers:
//! object identities and kinds, typed attribute records, SE(2) poses,
//! the world state, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod id;
pub mod object;
pub mod pose;
pub mod state;

pub use bounds::{ActionLimits, WorldBounds};
pub use error::{SceneError, SpecError, StateError};
pub use id::{ObjectId, ObjectKind};
pub use object::{ObjectAttrs, RectangleAttrs, Rgb, RobotAttrs, ZOrder};
pub use pose::{PoseBounds, SE2Pose};
pub use state::{StateDraft, WorldState};
