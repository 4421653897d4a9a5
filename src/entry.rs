//! Entry type for the priority queue
//!
//! An [`Entry`] pairs a caller-supplied value with the priority it was
//! inserted at and the monotonic id the queue assigned on insertion.
//! Entries are created internally by the queue; callers receive them
//! back from `pop` with full ownership of the value.

/// One queued item: a value, its priority, and its insertion id.
///
/// Smaller priorities are extracted first. The id is a monotonically
/// increasing sequence number assigned at insertion time and is used
/// only to break priority ties: among equal priorities, the lower id
/// (the earlier insertion) wins, giving FIFO extraction order.
///
/// The value type is opaque to the queue. Callers that need a type tag
/// alongside their data express it as their own enum:
///
/// ```rust
/// enum Job {
///     Compact { shard: u32 },
///     Flush(String),
/// }
///
/// let queue = priqueue::PriorityQueue::new(16);
/// queue.insert(Job::Flush("wal-7".to_string()), 2).unwrap();
/// ```
#[derive(Debug)]
pub struct Entry<T> {
    priority: u64,
    id: u64,
    value: T,
}

impl<T> Entry<T> {
    pub(crate) fn new(priority: u64, value: T) -> Self {
        Self {
            priority,
            id: 0, // assigned by the heap core at insertion
            value,
        }
    }

    /// Priority this entry was inserted with; smaller pops first.
    pub fn priority(&self) -> u64 {
        self.priority
    }

    /// Insertion id assigned by the queue, used for tie-breaking.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Borrow the carried value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the entry, yielding ownership of the carried value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consume the entry into its priority and value.
    pub fn into_parts(self) -> (u64, T) {
        (self.priority, self.value)
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
