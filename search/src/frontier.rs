//! Frontier disciplines: FIFO queue, LIFO stack, and min-priority queue.
//!
//! All three store the same [`FrontierEntry`] and differ only in extraction
//! order, which is what lets one expansion loop drive every algorithm.
//!
//! Every entry carries a [`FrontierKey`] `(priority, insertion_index)`. The
//! priority queue orders by it; the queue and stack ignore it for ordering but
//! keep it so expansion events report the same key shape for every algorithm.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use pathscope_kernel::node::NodeId;

use crate::algorithm::Algorithm;

/// Frontier ordering key: lower `priority` first, then older `insertion_index`.
///
/// Priorities are compared with `f64::total_cmp`, so the order is total even
/// though the key holds a float. Insertion indices are unique per search, which
/// makes extraction order independent of `BinaryHeap` internals.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub insertion_index: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.insertion_index.cmp(&other.insertion_index))
    }
}

/// A discovered node waiting for expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry {
    pub key: FrontierKey,
    pub node: NodeId,
    /// Node this entry was reached from (`None` for the start node).
    pub parent: Option<NodeId>,
    /// Path cost from start along `parent`.
    pub g_cost: f64,
}

/// Capability shared by every frontier discipline.
pub trait Frontier: std::fmt::Debug {
    /// Add an entry.
    fn insert(&mut self, entry: FrontierEntry);

    /// Remove and return the next entry under this discipline.
    fn extract(&mut self) -> Option<FrontierEntry>;

    /// Number of stored entries, including ones that will later be skipped.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest `len()` ever observed.
    fn high_water(&self) -> u64;

    /// Stored entries in the order `extract` would return them.
    fn pending(&self) -> Vec<&FrontierEntry>;
}

/// Build the frontier discipline an algorithm expands from.
#[must_use]
pub fn frontier_for(algorithm: Algorithm) -> Box<dyn Frontier> {
    match algorithm {
        Algorithm::BreadthFirst => Box::new(FifoFrontier::default()),
        Algorithm::DepthFirst => Box::new(LifoFrontier::default()),
        Algorithm::BestFirst => Box::new(PriorityFrontier::default()),
    }
}

fn bump(high_water: &mut u64, len: usize) {
    let len = len as u64;
    if len > *high_water {
        *high_water = len;
    }
}

/// First-in first-out queue (breadth-first).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<FrontierEntry>,
    high_water: u64,
}

impl Frontier for FifoFrontier {
    fn insert(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
        bump(&mut self.high_water, self.queue.len());
    }

    fn extract(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }

    fn pending(&self) -> Vec<&FrontierEntry> {
        self.queue.iter().collect()
    }
}

/// Last-in first-out stack (depth-first).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<FrontierEntry>,
    high_water: u64,
}

impl Frontier for LifoFrontier {
    fn insert(&mut self, entry: FrontierEntry) {
        self.stack.push(entry);
        bump(&mut self.high_water, self.stack.len());
    }

    fn extract(&mut self) -> Option<FrontierEntry> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }

    fn pending(&self) -> Vec<&FrontierEntry> {
        self.stack.iter().rev().collect()
    }
}

/// Heap entry wrapping a frontier entry with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct HeapEntry {
    key: Reverse<FrontierKey>,
    entry: FrontierEntry,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Minimum-priority queue (best-first / A*).
///
/// Decrease-key is done by reinsertion: a node may be stored several times
/// with different keys, and the caller discards the stale copies when they
/// surface.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<HeapEntry>,
    high_water: u64,
}

impl Frontier for PriorityFrontier {
    fn insert(&mut self, entry: FrontierEntry) {
        self.heap.push(HeapEntry {
            key: Reverse(entry.key),
            entry,
        });
        bump(&mut self.high_water, self.heap.len());
    }

    fn extract(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|h| h.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }

    fn pending(&self) -> Vec<&FrontierEntry> {
        let mut entries: Vec<&FrontierEntry> = self.heap.iter().map(|h| &h.entry).collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }
}
