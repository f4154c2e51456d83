//! ASCII rendering of a maze and, optionally, a search result.

use std::collections::HashSet;

use maze_core::{Direction, Maze, Point};
use maze_paths::NodeList;

const CORNER: char = '+';
const HWALL: &str = "---";
const HOPEN: &str = "   ";

/// Draw `maze` as text.
///
/// Walls are drawn with `+`, `---` and `|`. Each cell is three characters
/// wide: `S` marks the start, `E` the end. When `nodes` is given, cells on
/// the solution path get `*` and other explored cells get `.`.
///
/// Every wall is taken from the cell to its south or east, so a passage that
/// is open on one side only is drawn as open.
pub fn render(maze: &Maze, nodes: Option<&NodeList>) -> String {
    let size = maze.size();
    let (path, explored) = match nodes {
        Some(list) => {
            let path: HashSet<Point> = list
                .solution(maze.end())
                .map(|p| p.map(|n| n.point).collect())
                .unwrap_or_default();
            let explored: HashSet<Point> = list.iter().map(|n| n.point).collect();
            (path, explored)
        }
        None => (HashSet::new(), HashSet::new()),
    };

    let width = size.width as usize;
    let mut s = String::with_capacity((width * 4 + 2) * (size.height as usize * 2 + 1));
    for y in 0..size.height {
        for x in 0..size.width {
            let here = maze.at(Point::new(x, y));
            s.push(CORNER);
            s.push_str(if here.contains(Direction::North) { HOPEN } else { HWALL });
        }
        s.push(CORNER);
        s.push('\n');

        for x in 0..size.width {
            let p = Point::new(x, y);
            let here = maze.at(p);
            s.push(if here.contains(Direction::West) { ' ' } else { '|' });
            let mark = if p == maze.start() {
                'S'
            } else if p == maze.end() {
                'E'
            } else if path.contains(&p) {
                '*'
            } else if explored.contains(&p) {
                '.'
            } else {
                ' '
            };
            s.push(' ');
            s.push(mark);
            s.push(' ');
        }
        let last = maze.at(Point::new(size.width - 1, y));
        s.push(if last.contains(Direction::East) { ' ' } else { '|' });
        s.push('\n');
    }
    for x in 0..size.width {
        let here = maze.at(Point::new(x, size.height - 1));
        s.push(CORNER);
        s.push_str(if here.contains(Direction::South) { HOPEN } else { HWALL });
    }
    s.push(CORNER);
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_maze;
    use maze_core::Size;
    use maze_paths::solve;

    #[test]
    fn closed_single_cell() {
        let m = Maze::new(Size::new(1, 1), Point::ZERO, Point::ZERO).unwrap();
        assert_eq!(render(&m, None), "+---+\n| S |\n+---+\n");
    }

    #[test]
    fn open_row() {
        let mut m = Maze::new(Size::new(3, 1), Point::ZERO, Point::new(2, 0)).unwrap();
        m.open_all().unwrap();
        let want = "\
+---+---+---+
| S       E |
+---+---+---+
";
        assert_eq!(render(&m, None), want);
    }

    #[test]
    fn marks_path_and_explored() {
        let m = parse_maze("3 4\n0 0\n2 3\n14 9 12 9\n12 1 5 5\n7 6 3 7\n").unwrap();
        let mut out = NodeList::new();
        solve(&m, &mut out).unwrap();
        let want = "\
+---+---+---+---+
| S   * | *   * |
+---+   +   +   +
| .   * | * | * |
+   +   +   +   +
| . | *   * | E |
+---+---+---+---+
";
        assert_eq!(render(&m, Some(&out)), want);
    }

    #[test]
    fn unsolved_shows_only_explored() {
        let mut m = Maze::new(Size::new(3, 1), Point::ZERO, Point::new(2, 0)).unwrap();
        m.carve(Point::ZERO, Direction::East).unwrap();
        let mut out = NodeList::new();
        solve(&m, &mut out).unwrap();
        let r = render(&m, Some(&out));
        assert!(r.contains("| S   . |"));
        assert!(!r.contains('*'));
    }
}
