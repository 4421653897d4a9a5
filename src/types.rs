//! Type definitions for the priority queue
//!
//! This module contains the configuration and statistics value types
//! used by [`PriorityQueue`](crate::PriorityQueue).

/// Default initial capacity when none is configured.
pub const DEFAULT_CAPACITY: usize = 64;

/// Configuration for a priority queue instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Initial usable capacity. A hint only: an unlimited queue grows
    /// automatically once it fills.
    pub initial_capacity: usize,
    /// When `true`, `pop` on an empty queue suspends the calling thread
    /// until an insert occurs instead of returning `None`.
    pub blocking: bool,
    /// Hard ceiling on queued items; `0` means unbounded. A full queue
    /// with a positive limit rejects inserts instead of growing.
    pub limit: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            blocking: false,
            limit: 0,
        }
    }
}

/// Point-in-time statistics for a priority queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of entries currently queued
    pub len: usize,
    /// Usable entry slots currently allocated
    pub capacity: usize,
    /// Configured hard limit (`0` = unbounded)
    pub limit: usize,
    /// Next insertion id to be assigned
    pub next_id: u64,
}
