//! Queue Error Types

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Queue is full (limit: {limit})")]
    CapacityExceeded { limit: usize },

    #[error("Queue lock poisoned by a panicked thread")]
    LockPoisoned,
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
