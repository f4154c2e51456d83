//! The [`Maze`] type: a fixed-size grid of per-cell [`DirectionSet`]s.
//!
//! Cells are packed two per byte in row-major order (`index = y * width + x`).
//! An even index lives in the low nibble of byte `index / 2`, an odd index in
//! the high nibble.

use crate::error::{Error, Result};
use crate::geom::{Direction, DirectionSet, Point, Size};

/// A rectangular maze with a start and an end cell.
///
/// Size, start and end are fixed at construction. Only the per-cell direction
/// sets can change afterwards, through [`set_directions`](Maze::set_directions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: Size,
    start: Point,
    end: Point,
    cells: Vec<u8>,
}

impl Maze {
    /// Create a maze with every cell closed.
    ///
    /// Fails with [`Error::OutOfBounds`] if `start` or `end` is outside
    /// `size`, and with [`Error::AllocationFailure`] if the packed cell array
    /// cannot be allocated.
    pub fn new(size: Size, start: Point, end: Point) -> Result<Self> {
        for point in [start, end] {
            if !size.contains(point) {
                return Err(Error::OutOfBounds { point, size });
            }
        }
        let len = size.len().ok_or(Error::CapacityOverflow)?.div_ceil(2);
        let mut cells = Vec::new();
        cells.try_reserve_exact(len)?;
        cells.resize(len, 0);
        Ok(Self {
            size,
            start,
            end,
            cells,
        })
    }

    /// Grid dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// End (goal) cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Number of bytes backing the cell array.
    #[inline]
    pub fn packed_len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn check(&self, point: Point) -> Result<usize> {
        if self.size.contains(point) {
            Ok(self.size.index(point))
        } else {
            Err(Error::OutOfBounds {
                point,
                size: self.size,
            })
        }
    }

    /// The set of legal moves out of `point`.
    pub fn directions(&self, point: Point) -> Result<DirectionSet> {
        let idx = self.check(point)?;
        let byte = self.cells[idx / 2];
        let nibble = if idx & 1 == 0 { byte } else { byte >> 4 };
        Ok(DirectionSet::from_bits(nibble))
    }

    /// The set of legal moves out of `point`, or the empty set if `point` is
    /// outside the grid.
    pub fn at(&self, point: Point) -> DirectionSet {
        self.directions(point).unwrap_or(DirectionSet::EMPTY)
    }

    /// Replace the set of legal moves out of `point`. The cell sharing the
    /// same byte is left untouched.
    pub fn set_directions(&mut self, point: Point, set: DirectionSet) -> Result<()> {
        let idx = self.check(point)?;
        let byte = &mut self.cells[idx / 2];
        *byte = if idx & 1 == 0 {
            (*byte & 0xF0) | set.bits()
        } else {
            (*byte & 0x0F) | (set.bits() << 4)
        };
        Ok(())
    }

    /// Whether moving from `point` along `dir` is legal.
    pub fn is_open(&self, point: Point, dir: Direction) -> Result<bool> {
        Ok(self.directions(point)?.contains(dir))
    }

    /// Open the passage between `point` and its neighbour along `dir`, in
    /// both directions. Fails if the neighbour is outside the grid.
    pub fn carve(&mut self, point: Point, dir: Direction) -> Result<Point> {
        let mut here = self.directions(point)?;
        let next = point.step(dir, self.size).ok_or(Error::OutOfBounds {
            point,
            size: self.size,
        })?;
        let mut there = self.directions(next)?;
        here.insert(dir);
        there.insert(dir.opposite());
        self.set_directions(point, here)?;
        self.set_directions(next, there)?;
        Ok(next)
    }

    /// Open every passage between in-bounds neighbours. Boundary moves stay
    /// closed.
    pub fn open_all(&mut self) -> Result<()> {
        for p in self.size.points() {
            let mut set = DirectionSet::EMPTY;
            for dir in Direction::ALL {
                if p.step(dir, self.size).is_some() {
                    set.insert(dir);
                }
            }
            self.set_directions(p, set)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MazeRepr {
    size: Size,
    start: Point,
    end: Point,
    cells: Vec<u8>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        MazeRepr {
            size: self.size,
            start: self.start,
            end: self.end,
            cells: self.cells.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;
        let repr = MazeRepr::deserialize(deserializer)?;
        let mut maze = Maze::new(repr.size, repr.start, repr.end).map_err(D::Error::custom)?;
        if repr.cells.len() != maze.cells.len() {
            return Err(D::Error::invalid_length(
                repr.cells.len(),
                &"one byte per two cells",
            ));
        }
        maze.cells = repr.cells;
        Ok(maze)
    }
}
