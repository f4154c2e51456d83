//! Plain-text maze files and path listings.
//!
//! A maze file holds whitespace-separated unsigned integers:
//!
//! ```text
//! rows columns
//! start_row start_column
//! end_row end_column
//! w w w ...      (one line per row, one wall mask per column)
//! ```
//!
//! Each wall mask adds 8 for a wall to the north, 4 west, 2 south and 1 east.
//! The stored [`DirectionSet`] is its 4-bit complement.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, warn};
use maze_core::{Direction, DirectionSet, Maze, Point, Size};
use maze_paths::{NodeId, NodeList};

/// Errors that can occur when reading or writing a maze file.
#[derive(Debug)]
pub enum FormatError {
    /// The underlying reader or writer failed.
    Io(io::Error),
    /// The input ended before `expected` was read.
    UnexpectedEof { expected: &'static str },
    /// A token is not an unsigned integer.
    BadNumber { line: usize, token: String },
    /// A line has fewer values than required.
    MissingValue { line: usize, expected: usize },
    /// A line has more values than required.
    TrailingData { line: usize, token: String },
    /// The maze has zero rows or columns.
    ZeroSize,
    /// A wall mask is larger than 15.
    BadWalls { line: usize, value: u32 },
    /// The header describes an invalid maze.
    Maze(maze_core::Error),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "maze file: {e}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "maze file: unexpected end of input, expected {expected}")
            }
            Self::BadNumber { line, token } => {
                write!(f, "maze file line {line}: \u{201c}{token}\u{201d} is not a number")
            }
            Self::MissingValue { line, expected } => {
                write!(f, "maze file line {line}: expected {expected} values")
            }
            Self::TrailingData { line, token } => {
                write!(f, "maze file line {line}: unexpected \u{201c}{token}\u{201d}")
            }
            Self::ZeroSize => write!(f, "maze file: rows and columns must be non-zero"),
            Self::BadWalls { line, value } => {
                write!(f, "maze file line {line}: wall mask {value} is not in 0..=15")
            }
            Self::Maze(e) => write!(f, "maze file: {e}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FormatError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<maze_core::Error> for FormatError {
    fn from(e: maze_core::Error) -> Self {
        Self::Maze(e)
    }
}

/// Pulls non-blank lines and parses exact-width rows of numbers.
struct Lines<I> {
    inner: I,
    line: usize,
}

impl<I: Iterator<Item = io::Result<String>>> Lines<I> {
    fn row(&mut self, n: usize, expected: &'static str) -> Result<Vec<u32>, FormatError> {
        let text = loop {
            let Some(text) = self.inner.next() else {
                return Err(FormatError::UnexpectedEof { expected });
            };
            self.line += 1;
            let text = text?;
            if !text.trim().is_empty() {
                break text;
            }
        };
        let line = self.line;
        let mut tokens = text.split_whitespace();
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            let token = tokens
                .next()
                .ok_or(FormatError::MissingValue { line, expected: n })?;
            let value = token.parse().map_err(|_| FormatError::BadNumber {
                line,
                token: token.to_string(),
            })?;
            values.push(value);
        }
        if let Some(token) = tokens.next() {
            return Err(FormatError::TrailingData {
                line,
                token: token.to_string(),
            });
        }
        Ok(values)
    }
}

/// Read a maze from `reader`.
pub fn read_maze<R: BufRead>(reader: R) -> Result<Maze, FormatError> {
    let mut lines = Lines {
        inner: reader.lines(),
        line: 0,
    };

    let dims = lines.row(2, "maze size")?;
    let (rows, columns) = (dims[0], dims[1]);
    if rows == 0 || columns == 0 {
        return Err(FormatError::ZeroSize);
    }
    let start = lines.row(2, "start location")?;
    let end = lines.row(2, "end location")?;

    let size = Size::new(columns, rows);
    let mut maze = Maze::new(
        size,
        Point::new(start[1], start[0]),
        Point::new(end[1], end[0]),
    )?;

    let mut leaks = 0usize;
    for y in 0..rows {
        let walls = lines.row(columns as usize, "wall masks")?;
        for (x, value) in (0u32..).zip(walls) {
            let Some(bits) = u8::try_from(value).ok().filter(|&b| b <= 0xF) else {
                return Err(FormatError::BadWalls {
                    line: lines.line,
                    value,
                });
            };
            let p = Point::new(x, y);
            let set = DirectionSet::from_walls(bits);
            leaks += set.iter().filter(|&d| p.step(d, size).is_none()).count();
            maze.set_directions(p, set)?;
        }
    }
    if leaks > 0 {
        warn!("maze has {leaks} openings on its outer boundary; they lead nowhere");
    }
    debug!(
        "read {} maze, start {}, end {}",
        size,
        maze.start(),
        maze.end()
    );
    Ok(maze)
}

/// Parse a maze from a string.
pub fn parse_maze(s: &str) -> Result<Maze, FormatError> {
    read_maze(s.as_bytes())
}

/// Write `maze` in the format accepted by [`read_maze`].
pub fn write_maze<W: Write>(maze: &Maze, mut w: W) -> Result<(), FormatError> {
    let size = maze.size();
    writeln!(w, "{} {}", size.height, size.width)?;
    writeln!(w, "{} {}", maze.start().y, maze.start().x)?;
    writeln!(w, "{} {}", maze.end().y, maze.end().x)?;
    for y in 0..size.height {
        for x in 0..size.width {
            if x > 0 {
                w.write_all(b" ")?;
            }
            write!(w, "{}", maze.at(Point::new(x, y)).walls())?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Write the path ending at `goal` as `row column` lines, start first.
pub fn write_path<W: Write>(nodes: &NodeList, goal: NodeId, mut w: W) -> io::Result<()> {
    let mut points: Vec<Point> = nodes.path(goal).map(|n| n.point).collect();
    points.reverse();
    for p in points {
        writeln!(w, "{} {}", p.y, p.x)?;
    }
    Ok(())
}

/// The moves along the path ending at `goal`, start first.
pub fn path_moves(nodes: &NodeList, goal: NodeId) -> Vec<Direction> {
    let mut points: Vec<Point> = nodes.path(goal).map(|n| n.point).collect();
    points.reverse();
    points
        .windows(2)
        .filter_map(|w| Direction::between(w[0], w[1]))
        .collect()
}
