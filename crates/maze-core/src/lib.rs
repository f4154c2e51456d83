//! **maze-core**: geometry primitives and the packed maze model.
//!
//! A [`Maze`] is a fixed-size grid whose cells each carry a [`DirectionSet`]
//! of legal moves. Two cells share one byte of storage. Everything that can
//! fail returns [`Error`].

pub mod error;
pub mod geom;
pub mod maze;

pub use error::{Error, Result};
pub use geom::{Direction, DirectionSet, Point, Points, Size};
pub use maze::Maze;
