//! Geometry primitives: [`Point`], [`Size`], [`Direction`] and [`DirectionSet`].
//!
//! Coordinates are unsigned. X grows right (columns), Y grows down (rows).

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate in a maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The point one unit away along `dir`, or `None` if that leaves a grid
    /// of the given size.
    #[inline]
    pub fn step(self, dir: Direction, size: Size) -> Option<Point> {
        let p = match dir {
            Direction::North => Point::new(self.x, self.y.checked_sub(1)?),
            Direction::West => Point::new(self.x.checked_sub(1)?, self.y),
            Direction::South => Point::new(self.x, self.y.checked_add(1)?),
            Direction::East => Point::new(self.x.checked_add(1)?, self.y),
        };
        size.contains(p).then_some(p)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major ordering, matching the packed cell layout.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Dimensions of a rectangular maze anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `p` lies inside the grid: `x < width && y < height`.
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Whether the size has zero area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of cells, or `None` if it does not fit in a `usize`.
    #[inline]
    pub fn len(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Row-major index of `p`. Only meaningful when `p` is in bounds.
    #[inline]
    pub const fn index(self, p: Point) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    /// Row-major iterator over every point in the grid.
    #[inline]
    pub fn points(self) -> Points {
        Points {
            size: self,
            cur: Point::ZERO,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major iterator over the points of a [`Size`].
#[derive(Clone, Debug)]
pub struct Points {
    size: Size,
    cur: Point,
}

impl Iterator for Points {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.size.height || self.size.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.size.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.size.is_empty() || self.cur.y >= self.size.height {
            return (0, Some(0));
        }
        let w = self.size.width as usize;
        let remaining_in_row = (self.size.width - self.cur.x) as usize;
        let remaining_rows = (self.size.height - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for Points {}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves. The discriminant is the move's bit in a
/// [`DirectionSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 1 << 3,
    West = 1 << 2,
    South = 1 << 1,
    East = 1 << 0,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// The bit this direction occupies in a [`DirectionSet`].
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
        }
    }

    /// The direction that moves `from` onto the adjacent point `to`, or
    /// `None` if the points are not cardinal neighbours.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        match (to.x as i64 - from.x as i64, to.y as i64 - from.y as i64) {
            (0, -1) => Some(Direction::North),
            (-1, 0) => Some(Direction::West),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// DirectionSet
// ---------------------------------------------------------------------------

/// A 4-bit mask of the moves that are legal from a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// No moves (fully walled cell).
    pub const EMPTY: Self = Self(0);
    /// Every move.
    pub const ALL: Self = Self(0xF);

    /// Build a set from raw bits. Bits above the low nibble are discarded.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0xF)
    }

    /// Build a set from a wall mask (a set bit means a wall on that side).
    #[inline]
    pub const fn from_walls(walls: u8) -> Self {
        Self(!walls & 0xF)
    }

    /// Raw 4-bit representation.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The wall mask for this set of open directions.
    #[inline]
    pub const fn walls(self) -> u8 {
        !self.0 & 0xF
    }

    /// Whether `dir` is a legal move.
    #[inline]
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Whether no move is legal.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add `dir` to the set.
    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Remove `dir` from the set.
    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    /// Iterate over the contained directions in expansion order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl From<Direction> for DirectionSet {
    fn from(dir: Direction) -> Self {
        Self(dir.bit())
    }
}

impl BitOr for DirectionSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Direction> for DirectionSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Direction) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOr for Direction {
    type Output = DirectionSet;
    #[inline]
    fn bitor(self, rhs: Self) -> DirectionSet {
        DirectionSet(self.bit() | rhs.bit())
    }
}

impl BitOrAssign<Direction> for DirectionSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Direction) {
        self.insert(rhs);
    }
}

impl BitAnd for DirectionSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_contains_is_half_open() {
        let s = Size::new(3, 2);
        assert!(s.contains(Point::new(0, 0)));
        assert!(s.contains(Point::new(2, 1)));
        assert!(!s.contains(Point::new(3, 0)));
        assert!(!s.contains(Point::new(0, 2)));
        assert!(!Size::new(0, 0).contains(Point::ZERO));
    }

    #[test]
    fn size_boundaries() {
        assert!(Size::new(1, 1).contains(Point::new(0, 0)));
        assert!(!Size::new(1, 1).contains(Point::new(1, 0)));
        assert!(Size::new(256, 256).contains(Point::new(0, 255)));
        assert!(!Size::new(256, 256).contains(Point::new(0, 256)));
        assert!(Size::new(256, 256).contains(Point::new(255, 255)));
        assert!(!Size::new(1, 1).contains(Point::new(256, 256)));
        assert!(Size::new(65536, 4096).contains(Point::ZERO));
    }

    #[test]
    fn size_len() {
        assert_eq!(Size::new(4, 5).len(), Some(20));
        assert_eq!(Size::new(0, 5).len(), Some(0));
    }

    #[test]
    fn points_row_major() {
        let pts: Vec<_> = Size::new(3, 2).points().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(2, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(Size::new(3, 2).points().len(), 6);
        assert_eq!(Size::new(0, 2).points().count(), 0);
    }

    #[test]
    fn step_each_direction() {
        let s = Size::new(3, 3);
        let p = Point::new(1, 1);
        assert_eq!(p.step(Direction::East, s), Some(Point::new(2, 1)));
        assert_eq!(p.step(Direction::South, s), Some(Point::new(1, 2)));
        assert_eq!(p.step(Direction::West, s), Some(Point::new(0, 1)));
        assert_eq!(p.step(Direction::North, s), Some(Point::new(1, 0)));
    }

    #[test]
    fn step_off_grid_is_none() {
        let s = Size::new(2, 2);
        assert_eq!(Point::ZERO.step(Direction::North, s), None);
        assert_eq!(Point::ZERO.step(Direction::West, s), None);
        assert_eq!(Point::new(1, 1).step(Direction::East, s), None);
        assert_eq!(Point::new(1, 1).step(Direction::South, s), None);
    }

    #[test]
    fn between_adjacent() {
        let p = Point::new(1, 1);
        assert_eq!(Direction::between(p, Point::new(2, 1)), Some(Direction::East));
        assert_eq!(Direction::between(p, Point::new(1, 2)), Some(Direction::South));
        assert_eq!(Direction::between(p, Point::new(0, 1)), Some(Direction::West));
        assert_eq!(Direction::between(p, Point::new(1, 0)), Some(Direction::North));
        assert_eq!(Direction::between(p, Point::new(2, 2)), None);
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn opposite_round_trips() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn direction_set_ops() {
        let mut s = Direction::North | Direction::East;
        assert!(s.contains(Direction::North));
        assert!(s.contains(Direction::East));
        assert!(!s.contains(Direction::South));
        s |= Direction::South;
        s.remove(Direction::North);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![Direction::South, Direction::East]);
        assert!(DirectionSet::EMPTY.is_empty());
        assert_eq!(DirectionSet::ALL.iter().count(), 4);
    }

    #[test]
    fn walls_are_the_complement() {
        // North and east walls leave west and south open.
        let s = DirectionSet::from_walls(0b1001);
        assert_eq!(s, Direction::West | Direction::South);
        assert_eq!(s.walls(), 0b1001);
        assert_eq!(DirectionSet::from_walls(15), DirectionSet::EMPTY);
        assert_eq!(DirectionSet::from_walls(0), DirectionSet::ALL);
        assert_eq!(DirectionSet::from_bits(0xFF), DirectionSet::ALL);
    }
}
