//! The two [`Frontier`] implementations: a linear scan over a [`NodeList`]
//! and a binary heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use maze_core::Result;

use crate::nodelist::{Node, NodeList};
use crate::traits::Frontier;

impl Frontier for NodeList {
    fn insert(&mut self, node: Node, _key: u64) -> Result<()> {
        self.push(node).map(|_| ())
    }

    fn pop_min(&mut self, key: impl Fn(&Node) -> u64) -> Option<Node> {
        let mut best: Option<(usize, u64)> = None;
        for (i, node) in self.iter().enumerate() {
            let k = key(node);
            // Strict comparison keeps the lowest index among ties.
            if best.is_none_or(|(_, b)| k < b) {
                best = Some((i, k));
            }
        }
        best.map(|(i, _)| self.remove(i))
    }

    fn len(&self) -> usize {
        NodeList::len(self)
    }
}

/// Heap entry ordered by key, then by insertion sequence.
#[derive(Clone, Copy, Debug)]
struct Entry {
    key: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key, oldest first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap frontier. Selects exactly the nodes a [`NodeList`] scan would,
/// in O(log n) per operation.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut heap = BinaryHeap::new();
        heap.try_reserve_exact(capacity)?;
        Ok(Self { heap, seq: 0 })
    }
}

impl Frontier for HeapFrontier {
    fn insert(&mut self, node: Node, key: u64) -> Result<()> {
        self.heap.try_reserve(1)?;
        self.heap.push(Entry {
            key,
            seq: self.seq,
            node,
        });
        self.seq += 1;
        Ok(())
    }

    fn pop_min(&mut self, _key: impl Fn(&Node) -> u64) -> Option<Node> {
        self.heap.pop().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
