//! Read-only iteration over the queue's backing storage
//!
//! A [`QueueView`] is a short-lived cursor over the heap array taken
//! under the queue lock. Traversal is storage order (heap positions
//! `1..=len`), not sorted priority order: the heap invariant only
//! guarantees that parents precede their children, nothing more.

use crate::entry::Entry;
use crate::internal::HeapCore;
use std::sync::MutexGuard;

/// Locked read-only view of a queue, created by
/// [`PriorityQueue::view`](crate::PriorityQueue::view).
///
/// Holds the queue lock for its lifetime, so the entries it yields
/// cannot be mutated or freed underneath the iteration. Keep views
/// short-lived: every other queue operation waits until the view is
/// dropped.
#[derive(Debug)]
pub struct QueueView<'a, T> {
    guard: MutexGuard<'a, HeapCore<T>>,
}

impl<'a, T> QueueView<'a, T> {
    pub(crate) fn new(guard: MutexGuard<'a, HeapCore<T>>) -> Self {
        Self { guard }
    }

    /// Number of entries in the viewed queue.
    pub fn len(&self) -> usize {
        self.guard.len()
    }

    /// Whether the viewed queue is empty.
    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }

    /// Iterate the occupied slots in storage order.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            entries: self.guard.entries(),
            pos: 0,
        }
    }
}

impl<'a, 'v, T> IntoIterator for &'v QueueView<'a, T> {
    type Item = &'v Entry<T>;
    type IntoIter = QueueIter<'v, T>;

    fn into_iter(self) -> QueueIter<'v, T> {
        self.iter()
    }
}

/// Storage-order iterator over a [`QueueView`].
#[derive(Debug)]
pub struct QueueIter<'a, T> {
    entries: &'a [Entry<T>],
    pos: usize,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<&'a Entry<T>> {
        let entry = self.entries.get(self.pos)?;
        self.pos += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> {}
