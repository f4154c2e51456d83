use log::{debug, trace, warn};
use maze_core::{Error, Maze, Result};

use crate::frontier::HeapFrontier;
use crate::nodelist::{Node, NodeId, NodeList};
use crate::options::{FrontierKind, Heuristic, SolveOptions};
use crate::traits::Frontier;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The goal was expanded; the handle is the last node of the output.
    Reached(NodeId),
    /// The frontier ran dry before the goal was reached.
    Exhausted,
}

impl SearchOutcome {
    #[inline]
    pub fn is_reached(self) -> bool {
        matches!(self, SearchOutcome::Reached(_))
    }

    /// Handle of the goal node, if it was reached.
    #[inline]
    pub fn goal(self) -> Option<NodeId> {
        match self {
            SearchOutcome::Reached(id) => Some(id),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Search `maze` from its start to its end with the default options
/// (Euclidean heuristic, linear frontier).
///
/// See [`solve_with`].
pub fn solve(maze: &Maze, out: &mut NodeList) -> Result<SearchOutcome> {
    solve_with(maze, out, &SolveOptions::default())
}

/// Search `maze` from its start to its end using A*.
///
/// `out` is cleared, then receives every expanded node in expansion order.
/// Parent links are [`NodeId`]s into `out`. On success the last node sits on
/// the goal and walking its parents with [`NodeList::path`] yields the path
/// back to the start. When the goal is unreachable the last node sits
/// elsewhere (or `out` is empty) and [`SearchOutcome::Exhausted`] is
/// returned.
///
/// Each cell is expanded at most once. Duplicate frontier entries for a cell
/// already expanded are dropped when selected. Among nodes with equal
/// `path_cost + estimate`, the one discovered first is expanded first.
///
/// Fails only if the frontier, the output or the visited set cannot grow.
pub fn solve_with(maze: &Maze, out: &mut NodeList, options: &SolveOptions) -> Result<SearchOutcome> {
    let cells = maze.size().len().ok_or(Error::CapacityOverflow)?;
    match options.frontier {
        FrontierKind::Linear => {
            let frontier = NodeList::with_capacity(cells)?;
            search(maze, out, options.heuristic, frontier)
        }
        FrontierKind::Heap => {
            let frontier = HeapFrontier::with_capacity(cells)?;
            search(maze, out, options.heuristic, frontier)
        }
    }
}

fn search<F: Frontier>(
    maze: &Maze,
    out: &mut NodeList,
    heuristic: Heuristic,
    mut frontier: F,
) -> Result<SearchOutcome> {
    let size = maze.size();
    let goal = maze.end();
    let key = |n: &Node| n.path_cost.saturating_add(heuristic.estimate(n.point, goal));

    out.clear();
    let cells = size.len().ok_or(Error::CapacityOverflow)?;
    let mut closed: Vec<bool> = Vec::new();
    closed.try_reserve_exact(cells)?;
    closed.resize(cells, false);

    let root = Node::root(maze.start());
    frontier.insert(root, key(&root))?;
    debug!(
        "solving {} maze from {} to {} ({:?})",
        size,
        root.point,
        goal,
        heuristic
    );

    while let Some(node) = frontier.pop_min(&key) {
        let ci = size.index(node.point);
        if closed[ci] {
            trace!("dropping stale frontier entry at {}", node.point);
            continue;
        }
        closed[ci] = true;
        let id = out.push(node)?;

        if node.point == goal {
            debug!(
                "reached {} at cost {} after expanding {} nodes",
                goal,
                node.path_cost,
                out.len()
            );
            return Ok(SearchOutcome::Reached(id));
        }

        let dirs = maze.directions(node.point)?;
        trace!("expanding {} cost {} moves {:04b}", node.point, node.path_cost, dirs.bits());
        for dir in dirs.iter() {
            let Some(next) = node.point.step(dir, size) else {
                warn!("cell {} opens {:?} off the grid; ignoring", node.point, dir);
                continue;
            };
            if closed[size.index(next)] {
                continue;
            }
            let child = Node::child(next, id, node.path_cost);
            frontier.insert(child, key(&child))?;
        }
    }

    debug!("frontier exhausted after expanding {} nodes", out.len());
    Ok(SearchOutcome::Exhausted)
}
