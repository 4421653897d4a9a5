//! Internal heap core implementation
//!
//! This module provides the unsynchronized min-heap engine with:
//! - Array-backed storage with 1-based position arithmetic
//! - Priority-only sift-up and (priority, id) sift-down
//! - Doubling growth with an optional hard capacity limit
//! - Monotonic insertion ids and the id-renumbering recovery pass
//!
//! All synchronisation lives in [`PriorityQueue`](crate::PriorityQueue),
//! which wraps a `HeapCore` in a mutex and holds it for the whole of
//! every operation.

use crate::entry::Entry;
use crate::error::{QueueError, QueueResult};
use crate::types::{QueueConfig, QueueStats};

/// Unsynchronized binary min-heap over a growable array.
///
/// Heap positions are 1-based: the parent of position `i` is `i / 2`
/// and its children are `2i` and `2i + 1`. Position `i` is stored at
/// `entries[i - 1]`, which preserves the classic reserved-slot-0
/// arithmetic without carrying a sentinel element.
#[derive(Debug)]
pub(crate) struct HeapCore<T> {
    /// Occupied heap positions `1..=len`, in storage order.
    entries: Vec<Entry<T>>,
    /// Usable entry slots currently allocated.
    capacity: usize,
    /// Hard capacity ceiling; `0` means unbounded.
    limit: usize,
    /// Next insertion id; monotonic until a renumbering pass resets it.
    next_id: u64,
}

impl<T> HeapCore<T> {
    pub(crate) fn new(config: &QueueConfig) -> Self {
        // A positive limit freezes capacity: the heap never grows while
        // limited, so allocating past the limit would be dead space.
        let capacity = if config.limit > 0 {
            config.initial_capacity.min(config.limit)
        } else {
            config.initial_capacity
        };

        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            limit: config.limit,
            next_id: 1,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current root (minimum) entry, if any.
    pub(crate) fn root(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    /// Occupied slots in storage order (positions `1..=len`).
    pub(crate) fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub(crate) fn stats(&self) -> QueueStats {
        QueueStats {
            len: self.entries.len(),
            capacity: self.capacity,
            limit: self.limit,
            next_id: self.next_id,
        }
    }

    /// Insert a value at the given priority.
    ///
    /// Returns the number of entries queued after the insert, or
    /// [`QueueError::CapacityExceeded`] when the heap is full and a
    /// limit is configured. A rejected value is dropped here: ownership
    /// transferred to the queue at the call and does not return.
    pub(crate) fn insert(&mut self, value: T, priority: u64) -> QueueResult<usize> {
        if self.entries.len() == self.capacity {
            if self.limit > 0 {
                log::debug!("insert rejected: queue full at limit {}", self.limit);
                return Err(QueueError::CapacityExceeded { limit: self.limit });
            }
            self.grow();
        }

        if self.next_id == u64::MAX {
            self.renumber();
        }

        self.place(Entry::new(priority, value));
        Ok(self.entries.len())
    }

    /// Remove and return the minimum entry, or `None` when empty.
    ///
    /// The last occupied position moves to the root, the count shrinks
    /// by one, and the moved entry sifts down with the (priority, id)
    /// comparator.
    pub(crate) fn remove_min(&mut self) -> Option<Entry<T>> {
        let last = self.entries.pop()?;
        if self.entries.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.entries[0], last);
        self.sift_down(1);
        Some(root)
    }

    /// Assign the next id to the entry and sift it into place.
    fn place(&mut self, mut entry: Entry<T>) {
        entry.set_id(self.next_id);
        self.next_id += 1;
        self.entries.push(entry);
        self.sift_up(self.entries.len());
    }

    /// Double the usable capacity plus one slot. Allocation failure
    /// aborts the process (resource exhaustion is not a per-call error).
    fn grow(&mut self) {
        let grown = self.capacity * 2 + 1;
        log::trace!(
            "growing heap storage from {} to {} slots",
            self.capacity,
            grown
        );
        self.entries.reserve(grown - self.entries.len());
        self.capacity = grown;
    }

    /// Id-exhaustion recovery: drain the heap in pop order, reset the
    /// id counter to 1, and re-insert every entry through the normal
    /// assignment path. Pop order is (priority, id) ascending, so
    /// surviving entries receive ids `1..=n` in exactly their relative
    /// extraction order and FIFO ties are preserved.
    fn renumber(&mut self) {
        log::warn!(
            "insertion id space exhausted; renumbering {} queued entries",
            self.entries.len()
        );

        let mut drained = Vec::with_capacity(self.entries.len());
        while let Some(entry) = self.remove_min() {
            drained.push(entry);
        }

        self.next_id = 1;
        for entry in drained {
            self.place(entry);
        }
    }

    /// Restore heap order upward from `hole` after an append.
    ///
    /// Compares priority only: equal-priority entries are not reordered
    /// on the way up. Ties are settled by id solely on the pop path.
    fn sift_up(&mut self, mut hole: usize) {
        while hole > 1 && self.entries[hole - 1].priority() < self.entries[hole / 2 - 1].priority()
        {
            self.entries.swap(hole - 1, hole / 2 - 1);
            hole /= 2;
        }
    }

    /// Restore heap order downward from `hole` after a root replacement.
    fn sift_down(&mut self, mut hole: usize) {
        loop {
            // Pick the smaller child of positions 2*hole and 2*hole + 1.
            let mut child = hole * 2;
            if child > self.entries.len() {
                break;
            }
            if child < self.entries.len()
                && Self::precedes(&self.entries[child], &self.entries[child - 1])
            {
                child += 1;
            }
            if Self::precedes(&self.entries[child - 1], &self.entries[hole - 1]) {
                self.entries.swap(child - 1, hole - 1);
                hole = child;
            } else {
                break;
            }
        }
    }

    /// Pop-side comparator: priority ascending, id breaks ties.
    fn precedes(a: &Entry<T>, b: &Entry<T>) -> bool {
        a.priority() < b.priority() || (a.priority() == b.priority() && a.id() < b.id())
    }

    #[cfg(test)]
    pub(crate) fn set_next_id(&mut self, id: u64) {
        self.next_id = id;
    }

    /// Heap-order invariant: every occupied position's priority is at
    /// least its parent's.
    #[cfg(test)]
    pub(crate) fn is_valid_heap(&self) -> bool {
        (2..=self.entries.len())
            .all(|pos| self.entries[pos - 1].priority() >= self.entries[pos / 2 - 1].priority())
    }
}
