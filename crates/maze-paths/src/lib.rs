//! A* search over [`maze_core::Maze`] grids.
//!
//! - [`solve`] / [`solve_with`] run the search and fill a caller-owned
//!   [`NodeList`] with every expanded node in order.
//! - [`NodeList`] is both the frontier (linear scan) and the explored arena.
//!   Parent links are [`NodeId`] indices, so they survive reallocation.
//! - [`HeapFrontier`] is a drop-in binary-heap frontier with the same
//!   selection order.
//!
//! # Heuristics
//!
//! | [`Heuristic`] | Admissible | Result |
//! |---|---|---|
//! | `Euclidean` (default) | yes | shortest path |
//! | `Manhattan` | yes | shortest path |
//! | `SquaredEuclidean` | no | some path, found greedily |

mod astar;
mod distance;
mod frontier;
mod nodelist;
mod options;
mod traits;

pub use astar::{SearchOutcome, solve, solve_with};
pub use distance::{euclidean, manhattan, squared_euclidean};
pub use frontier::HeapFrontier;
pub use nodelist::{Node, NodeId, NodeList, Path};
pub use options::{FrontierKind, Heuristic, ParseOptionError, SolveOptions};
pub use traits::Frontier;
