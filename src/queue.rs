//! Thread-safe priority queue over the heap core
//!
//! [`PriorityQueue`] wraps the heap engine in a single per-instance
//! mutex and holds it for the whole of every operation, so no thread
//! can observe a partially-grown or partially-renumbered heap. In
//! blocking mode a condition variable parks empty-queue consumers
//! until a producer inserts.

use crate::entry::Entry;
use crate::error::{QueueError, QueueResult};
use crate::internal::HeapCore;
use crate::iter::QueueView;
use crate::types::{QueueConfig, QueueStats};
use std::ops::Deref;
use std::sync::{Condvar, Mutex, MutexGuard};

/// Thread-safe array-backed binary min-heap priority queue
///
/// Any number of threads may insert and remove concurrently through a
/// shared `Arc<PriorityQueue<T>>`. The lowest priority value pops
/// first; equal priorities pop in insertion order (FIFO), tracked by a
/// monotonic insertion id.
///
/// # Ownership
///
/// `insert` consumes the value; the queue owns it until `pop` hands it
/// back inside an [`Entry`], or until the queue itself is dropped,
/// which releases every remaining value exactly once. A value rejected
/// for capacity is dropped by the queue as well - the caller must not
/// expect it back.
///
/// # Example
///
/// ```rust
/// use priqueue::{PriorityQueue, QueueConfig};
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(PriorityQueue::with_config(QueueConfig {
///     blocking: true,
///     ..QueueConfig::default()
/// }));
///
/// let consumer = {
///     let queue = Arc::clone(&queue);
///     thread::spawn(move || queue.pop().unwrap().unwrap().into_value())
/// };
///
/// queue.insert("work item", 3).unwrap();
/// assert_eq!(consumer.join().unwrap(), "work item");
/// ```
#[derive(Debug)]
pub struct PriorityQueue<T> {
    core: Mutex<HeapCore<T>>,
    /// Signalled after each insert when in blocking mode.
    not_empty: Condvar,
    config: QueueConfig,
}

impl<T> PriorityQueue<T> {
    /// Create a non-blocking, unbounded queue with the given initial
    /// capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_config(QueueConfig {
            initial_capacity,
            ..QueueConfig::default()
        })
    }

    /// Create a queue from an explicit configuration.
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            core: Mutex::new(HeapCore::new(&config)),
            not_empty: Condvar::new(),
            config,
        }
    }

    /// Configuration this queue was created with.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    fn lock(&self) -> QueueResult<MutexGuard<'_, HeapCore<T>>> {
        self.core.lock().map_err(|_| QueueError::LockPoisoned)
    }

    /// Insert a value at the given priority; smaller priorities pop
    /// first.
    ///
    /// Returns the number of items queued after the insert. A full
    /// queue grows automatically unless a limit is configured, in which
    /// case the insert returns [`QueueError::CapacityExceeded`] and the
    /// rejected value is dropped by the queue.
    ///
    /// In blocking mode one waiting consumer is signalled after the
    /// lock is released.
    pub fn insert(&self, value: T, priority: u64) -> QueueResult<usize> {
        let result = {
            let mut core = self.lock()?;
            core.insert(value, priority)
        };
        // Signalled outside the critical section; a waiter woken on a
        // rejected insert re-checks emptiness and parks again.
        if self.config.blocking {
            self.not_empty.notify_one();
        }
        result
    }

    /// Remove and return the lowest-priority entry.
    ///
    /// In blocking mode an empty queue suspends the calling thread
    /// until a concurrent insert occurs, so `Ok(None)` is never
    /// returned. In non-blocking mode an empty queue returns `Ok(None)`
    /// immediately. Ownership of the entry's value transfers to the
    /// caller.
    pub fn pop(&self) -> QueueResult<Option<Entry<T>>> {
        let mut core = self.lock()?;
        if self.config.blocking {
            // Re-check after every wake: spurious wakeups and competing
            // consumers can leave the queue empty again.
            while core.is_empty() {
                core = self
                    .not_empty
                    .wait(core)
                    .map_err(|_| QueueError::LockPoisoned)?;
            }
        }
        Ok(core.remove_min())
    }

    /// Borrow the lowest-priority entry without removing it.
    ///
    /// Never blocks on emptiness, in either mode. The returned
    /// [`PeekRef`] holds the queue lock: other operations wait until it
    /// is dropped, and the reference cannot be invalidated underneath
    /// the caller.
    pub fn peek(&self) -> QueueResult<Option<PeekRef<'_, T>>> {
        let guard = self.lock()?;
        if guard.is_empty() {
            return Ok(None);
        }
        Ok(Some(PeekRef { guard }))
    }

    /// Atomically move every entry into a freshly created queue of the
    /// same configuration, leaving this queue empty.
    ///
    /// Entries leave in pop order and the destination assigns fresh
    /// ids from 1, so relative FIFO order among equal priorities is
    /// preserved.
    pub fn drain_all(&self) -> QueueResult<PriorityQueue<T>> {
        let destination = PriorityQueue::with_config(self.config.clone());
        let mut source = self.lock()?;
        {
            let mut dest_core = destination.lock()?;
            log::debug!("draining {} entries into a fresh queue", source.len());
            while let Some(entry) = source.remove_min() {
                let (priority, value) = entry.into_parts();
                dest_core.insert(value, priority)?;
            }
        }
        Ok(destination)
    }

    /// Number of entries currently queued.
    pub fn len(&self) -> QueueResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> QueueResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Point-in-time statistics: length, allocated capacity, limit and
    /// the next insertion id.
    pub fn stats(&self) -> QueueResult<QueueStats> {
        Ok(self.lock()?.stats())
    }

    /// Take a locked read-only view for storage-order iteration.
    ///
    /// The view holds the queue lock for its lifetime; see
    /// [`QueueView`] for the traversal contract.
    pub fn view(&self) -> QueueResult<QueueView<'_, T>> {
        Ok(QueueView::new(self.lock()?))
    }

    #[cfg(test)]
    pub(crate) fn force_next_id(&self, id: u64) {
        self.core.lock().unwrap().set_next_id(id);
    }
}

/// Locked borrow of the queue's root entry, returned by
/// [`PriorityQueue::peek`].
///
/// Dereferences to the [`Entry`] with the smallest (priority, id). The
/// queue lock is held until the `PeekRef` is dropped.
#[derive(Debug)]
pub struct PeekRef<'a, T> {
    guard: MutexGuard<'a, HeapCore<T>>,
}

impl<T> Deref for PeekRef<'_, T> {
    type Target = Entry<T>;

    fn deref(&self) -> &Entry<T> {
        match self.guard.root() {
            Some(entry) => entry,
            // Constructed only on a non-empty heap, and the held guard
            // keeps it non-empty.
            None => unreachable!("PeekRef on empty heap"),
        }
    }
}
