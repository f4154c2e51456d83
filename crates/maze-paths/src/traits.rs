use maze_core::Result;

use crate::nodelist::Node;

/// Storage for discovered-but-unexpanded nodes.
///
/// Implementations must pop the node with the smallest key, and among equal
/// keys the one inserted first. Both search strategies rely on this to expand
/// nodes in the same order.
pub trait Frontier {
    /// Add `node` with priority `key` (path cost plus heuristic estimate).
    fn insert(&mut self, node: Node, key: u64) -> Result<()>;

    /// Remove and return the best node. `key` recomputes a node's priority
    /// for implementations that do not store it.
    fn pop_min(&mut self, key: impl Fn(&Node) -> u64) -> Option<Node>;

    /// Number of pending nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
