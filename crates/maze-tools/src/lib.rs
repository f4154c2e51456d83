//! Utilities around the maze solver: the plain-text maze format, path
//! listings, ASCII rendering and random maze generation.

pub mod format;
pub mod mazegen;
pub mod render;

pub use format::{FormatError, parse_maze, path_moves, read_maze, write_maze, write_path};
pub use mazegen::MazeGen;
pub use render::render;
