//! Indexed binary min-heap used as the A* open list.
//!
//! A plain `BinaryHeap` cannot re-rank an element whose cost was lowered by
//! a relaxation, so the open list tracks every queued node's slot in a side
//! array keyed by node id. That makes membership O(1) and a priority
//! decrease O(log n) via a sift-up from the node's current slot.

use crate::grid::NodeId;

/// Sentinel slot value for nodes not currently queued.
const NO_SLOT: usize = usize::MAX;

/// Heap ordering key.
///
/// Primary key is `f_cost` (estimated total route cost); ties prefer the
/// lower `h_cost`, which descends towards nodes closer to the goal and
/// shrinks the expanded set on cost plateaus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority {
    /// g + h, the estimated total route cost through the node
    pub f_cost: u32,
    /// Heuristic remainder towards the goal
    pub h_cost: u32,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    node: NodeId,
    priority: Priority,
}

/// Min-heap over node ids with O(1) membership and O(log n) decrease.
///
/// Capacity is fixed at construction to the grid's node count. One search
/// can never queue more nodes than the grid has cells, so running past
/// capacity is a caller bug and panics.
pub struct OpenList {
    entries: Vec<Entry>,
    /// Slot of each node in `entries`, `NO_SLOT` when absent.
    slots: Vec<usize>,
}

impl OpenList {
    /// Create an open list for a grid of `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: vec![NO_SLOT; capacity],
        }
    }

    /// Number of queued nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the open list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// O(1) membership test.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.slots[node] != NO_SLOT
    }

    /// Queue a node.
    ///
    /// # Panics
    /// Panics if the node is already queued or the list is at capacity.
    pub fn push(&mut self, node: NodeId, priority: Priority) {
        assert!(self.entries.len() < self.slots.len(), "open list over capacity");
        assert!(!self.contains(node), "node {} already queued", node);

        let slot = self.entries.len();
        self.entries.push(Entry { node, priority });
        self.slots[node] = slot;
        self.sift_up(slot);
    }

    /// Remove and return the lowest-priority node, or `None` when empty.
    pub fn pop(&mut self) -> Option<(NodeId, Priority)> {
        if self.entries.is_empty() {
            return None;
        }

        // Last entry takes the root's place, then sinks to its level.
        let root = self.entries.swap_remove(0);
        self.slots[root.node] = NO_SLOT;
        if let Some(entry) = self.entries.first() {
            self.slots[entry.node] = 0;
            self.sift_down(0);
        }
        Some((root.node, root.priority))
    }

    /// Re-rank a queued node after its priority was lowered.
    ///
    /// Priorities only ever decrease during relaxation, so a sift-up from
    /// the node's current slot restores the heap property.
    ///
    /// # Panics
    /// Panics if the node is not queued.
    pub fn decrease(&mut self, node: NodeId, priority: Priority) {
        let slot = self.slots[node];
        assert!(slot != NO_SLOT, "node {} not queued", node);
        debug_assert!(
            priority <= self.entries[slot].priority,
            "priority of node {} may only decrease",
            node
        );

        self.entries[slot].priority = priority;
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].priority >= self.entries[parent].priority {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < self.entries.len()
                && self.entries[left].priority < self.entries[smallest].priority
            {
                smallest = left;
            }
            if right < self.entries.len()
                && self.entries[right].priority < self.entries[smallest].priority
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots[self.entries[a].node] = a;
        self.slots[self.entries[b].node] = b;
    }
}
