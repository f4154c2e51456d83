//! Random maze generation.

use log::debug;
use maze_core::{Direction, Error, Maze, Point, Result, Size};
use rand::Rng;

/// Maze generator driven by a caller-supplied random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze: every cell is reachable from every other along
    /// exactly one path, and no move leaves the grid.
    ///
    /// Uses an iterative randomized depth-first backtracker starting at
    /// `start`.
    pub fn perfect(&mut self, size: Size, start: Point, end: Point) -> Result<Maze> {
        let mut maze = Maze::new(size, start, end)?;
        let cells = size.len().ok_or(Error::CapacityOverflow)?;
        let mut visited: Vec<bool> = Vec::new();
        visited.try_reserve_exact(cells)?;
        visited.resize(cells, false);
        let mut stack: Vec<Point> = Vec::new();
        stack.try_reserve(cells.min(1024))?;

        visited[size.index(start)] = true;
        stack.push(start);
        let mut options = [Direction::North; 4];
        while let Some(&here) = stack.last() {
            let mut n = 0;
            for dir in Direction::ALL {
                if let Some(next) = here.step(dir, size) {
                    if !visited[size.index(next)] {
                        options[n] = dir;
                        n += 1;
                    }
                }
            }
            if n == 0 {
                stack.pop();
                continue;
            }
            let dir = options[self.rng.random_range(0..n)];
            let next = maze.carve(here, dir)?;
            visited[size.index(next)] = true;
            stack.try_reserve(1)?;
            stack.push(next);
        }
        debug!("carved perfect {} maze from {}", size, start);
        Ok(maze)
    }

    /// Knock down interior walls at random, each with probability `chance`,
    /// so that some cells are joined by more than one path. Returns the
    /// number of passages opened.
    pub fn add_loops(&mut self, maze: &mut Maze, chance: f64) -> Result<usize> {
        let size = maze.size();
        let mut opened = 0;
        for p in size.points() {
            for dir in [Direction::South, Direction::East] {
                if p.step(dir, size).is_none() || maze.is_open(p, dir)? {
                    continue;
                }
                if self.rng.random_bool(chance) {
                    maze.carve(p, dir)?;
                    opened += 1;
                }
            }
        }
        debug!("opened {opened} extra passages");
        Ok(opened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_paths::{NodeList, SearchOutcome, solve};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn passages(maze: &Maze) -> usize {
        let open: usize = maze.size().points().map(|p| maze.at(p).iter().count()).sum();
        open / 2
    }

    fn reachable(maze: &Maze, from: Point) -> usize {
        let size = maze.size();
        let mut seen = vec![false; size.len().unwrap()];
        let mut stack = vec![from];
        seen[size.index(from)] = true;
        let mut count = 0;
        while let Some(p) = stack.pop() {
            count += 1;
            for dir in maze.at(p).iter() {
                let q = p.step(dir, size).unwrap();
                if !seen[size.index(q)] {
                    seen[size.index(q)] = true;
                    stack.push(q);
                }
            }
        }
        count
    }

    #[test]
    fn perfect_mazes_are_spanning_trees() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(7));
        for (w, h) in [(1, 1), (1, 6), (5, 1), (4, 4), (13, 9), (30, 20)] {
            let size = Size::new(w, h);
            let end = Point::new(w - 1, h - 1);
            let m = mg.perfect(size, Point::ZERO, end).unwrap();
            let cells = size.len().unwrap();
            assert_eq!(passages(&m), cells - 1);
            assert_eq!(reachable(&m, Point::ZERO), cells);
        }
    }

    #[test]
    fn boundary_stays_closed() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(11));
        let size = Size::new(12, 8);
        let m = mg.perfect(size, Point::new(5, 3), Point::ZERO).unwrap();
        for p in size.points() {
            for dir in m.at(p).iter() {
                assert!(p.step(dir, size).is_some(), "{p} opens {dir:?}");
                let back = p.step(dir, size).unwrap();
                assert!(m.at(back).contains(dir.opposite()));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let size = Size::new(10, 10);
        let a = MazeGen::new(StdRng::seed_from_u64(42))
            .perfect(size, Point::ZERO, Point::new(9, 9))
            .unwrap();
        let b = MazeGen::new(StdRng::seed_from_u64(42))
            .perfect(size, Point::ZERO, Point::new(9, 9))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generated_mazes_are_solvable() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(3));
        let mut out = NodeList::new();
        for _ in 0..20 {
            let w = mg.rng.random_range(1..20);
            let h = mg.rng.random_range(1..20);
            let start = Point::new(mg.rng.random_range(0..w), mg.rng.random_range(0..h));
            let end = Point::new(mg.rng.random_range(0..w), mg.rng.random_range(0..h));
            let m = mg.perfect(Size::new(w, h), start, end).unwrap();
            let outcome = solve(&m, &mut out).unwrap();
            assert!(matches!(outcome, SearchOutcome::Reached(_)));
            assert_eq!(out.last().map(|n| n.point), Some(end));
        }
    }

    #[test]
    fn rejects_bad_endpoints() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(0));
        let err = mg
            .perfect(Size::new(3, 3), Point::ZERO, Point::new(3, 3))
            .unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }

    #[test]
    fn loops_add_passages() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(5));
        let size = Size::new(8, 8);
        let mut m = mg.perfect(size, Point::ZERO, Point::new(7, 7)).unwrap();
        let before = passages(&m);
        let opened = mg.add_loops(&mut m, 1.0).unwrap();
        assert_eq!(passages(&m), before + opened);
        // With chance 1 every interior wall is gone.
        let mut all = Maze::new(size, Point::ZERO, Point::new(7, 7)).unwrap();
        all.open_all().unwrap();
        assert_eq!(m, all);
        assert_eq!(mg.add_loops(&mut m, 0.0).unwrap(), 0);
    }
}
