use std::ops::Index;

use maze_core::{Error, Point, Result};

/// Stable handle to a node stored in a [`NodeList`].
///
/// A handle is a plain index, so it stays valid when the list grows. It is
/// invalidated only by inserting or removing at or before its position,
/// which the search never does on its output list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(usize);

impl NodeId {
    /// The position of the node in its list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A search-tree node: a cell, the node it was reached from, and the number
/// of steps taken from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub point: Point,
    pub parent: Option<NodeId>,
    pub path_cost: u64,
}

impl Node {
    /// A root node with no parent and zero cost.
    #[inline]
    pub const fn root(point: Point) -> Self {
        Self {
            point,
            parent: None,
            path_cost: 0,
        }
    }

    /// A child one step further than the node stored at `parent`.
    #[inline]
    pub const fn child(point: Point, parent: NodeId, parent_cost: u64) -> Self {
        Self {
            point,
            parent: Some(parent),
            path_cost: parent_cost + 1,
        }
    }
}

/// An ordered, growable sequence of [`Node`]s.
///
/// Serves both as the search frontier (arbitrary insert and remove with
/// shifting) and as the append-only explored list whose entries are referenced
/// by [`NodeId`] parent links. Growth doubles the capacity and reports
/// allocation failure instead of aborting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeList {
    nodes: Vec<Node>,
}

impl NodeList {
    /// An empty list that has not allocated.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// An empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(capacity)?;
        Ok(Self { nodes })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Make room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.nodes.try_reserve(additional)?;
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        if self.nodes.len() < self.nodes.capacity() {
            return Ok(());
        }
        let additional = self.nodes.capacity().max(1);
        self.nodes
            .try_reserve_exact(additional)
            .map_err(Error::AllocationFailure)
    }

    /// The node at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// The node a handle refers to, if it is still in range.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The parent of `node`, if it has one stored in this list.
    #[inline]
    pub fn parent(&self, node: &Node) -> Option<&Node> {
        node.parent.and_then(|id| self.node(id))
    }

    /// Insert `node` at `index`, shifting later nodes one place right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, node: Node) -> Result<()> {
        assert!(
            index <= self.nodes.len(),
            "insert index {index} past end of list (len {})",
            self.nodes.len()
        );
        self.grow()?;
        self.nodes.insert(index, node);
        Ok(())
    }

    /// Append `node` and return its handle.
    pub fn push(&mut self, node: Node) -> Result<NodeId> {
        self.grow()?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    /// Remove and return the node at `index`, shifting later nodes one place
    /// left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Node {
        self.nodes.remove(index)
    }

    /// Whether any node sits at `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.position(point).is_some()
    }

    /// Index of the first node at `point`.
    pub fn position(&self, point: Point) -> Option<usize> {
        self.nodes.iter().position(|n| n.point == point)
    }

    /// The most recently appended node.
    #[inline]
    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Handle of the last node.
    #[inline]
    pub fn last_id(&self) -> Option<NodeId> {
        self.nodes.len().checked_sub(1).map(NodeId)
    }

    /// Drop every node, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Walk parent links from `id` back to the root.
    pub fn path(&self, id: NodeId) -> Path<'_> {
        Path {
            list: self,
            next: Some(id),
        }
    }

    /// The goal-to-root path ending at the last node, if that node sits at
    /// `goal`. Returns `None` after an exhausted search.
    pub fn solution(&self, goal: Point) -> Option<Path<'_>> {
        let id = self.last_id()?;
        (self.nodes[id.0].point == goal).then(|| self.path(id))
    }
}

impl Index<NodeId> for NodeList {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a chain of parent links, from a node back to its root.
#[derive(Clone)]
pub struct Path<'a> {
    list: &'a NodeList,
    next: Option<NodeId>,
}

impl<'a> Iterator for Path<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let cur = self.next?;
        let node = self.list.node(cur)?;
        // Parents always precede their children; anything else is a corrupt
        // chain and would loop.
        self.next = node.parent.filter(|&p| p < cur);
        Some(node)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_list_round_trip() {
        let mut l = NodeList::new();
        let root = l.push(Node::root(Point::new(2, 3))).unwrap();
        l.push(Node::child(Point::new(2, 4), root, 0)).unwrap();
        let json = serde_json::to_string(&l).unwrap();
        let back: NodeList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
        assert_eq!(back.path(NodeId(1)).count(), 2);
    }
}
