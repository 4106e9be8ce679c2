//! Geometry for geoscene: shapes, collision queries, and walls.
//!
//! This crate defines the [`CollisionOracle`] trait, through which
//! samplers ask whether a candidate scene is feasible, together
//! with a reference implementation built on exact 2D shape tests.
//!
//! # Shapes
//!
//! - [`Circle`]: the robot base
//! - [`Rectangle`]: every other body, rotated about its lower-left corner
//!
//! Objects are converted to one or more layered [`Body`] values by
//! [`bodies`]; two bodies collide only if their [`ZOrder`](geoscene_core::ZOrder)
//! layers interact and their shapes overlap with positive area.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod collision;
pub mod shape;
pub mod walls;

pub use body::{bodies, object_shape, rectangle_shape, Body};
pub use collision::{CollisionOracle, GeometricOracle, Universe};
pub use shape::{Circle, Point, Rectangle, Shape};
pub use walls::boundary_walls;
