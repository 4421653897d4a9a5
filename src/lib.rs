//! Thread-safe binary-heap priority queue
//!
//! A reusable concurrency primitive: an array-backed min-heap that any
//! number of producer threads insert into and any number of consumer
//! threads pop from, in either blocking or non-blocking mode. Key
//! features include:
//!
//! - **Min-heap ordering**: the smallest priority pops first
//! - **Deterministic tie-breaking**: equal priorities pop in insertion
//!   order (FIFO), tracked by a monotonic 64-bit insertion id
//! - **Blocking consumers**: optional condition-variable wait on an
//!   empty queue, woken by the next insert
//! - **Bounded or unbounded**: doubling growth by default, or a hard
//!   capacity limit that rejects inserts instead of growing
//! - **Ownership transfer**: `insert` consumes the value, `pop` hands
//!   it back; whatever remains is released when the queue drops
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────┐
//! │ Producer A │   │ Producer B │   │ Producer C │
//! └─────┬──────┘   └─────┬──────┘   └─────┬──────┘
//!       │ insert         │ insert         │ insert
//!       ▼                ▼                ▼
//! ┌─────────────────────────────────────────────────┐
//! │          PriorityQueue (mutex + condvar)        │
//! │   array-backed min-heap, positions 1..=len      │
//! │   ┌─────┬─────┬─────┬─────┬─────┬─────┐         │
//! │   │ p=1 │ p=4 │ p=2 │ p=9 │ p=4 │ ... │         │
//! │   └─────┴─────┴─────┴─────┴─────┴─────┘         │
//! └───────┬───────────────────┬─────────────────────┘
//!         │ pop               │ pop
//! ┌───────┴──────┐    ┌──────┴───────┐
//! │  Consumer A  │    │  Consumer B  │  (blocking or non-blocking)
//! └──────────────┘    └──────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use priqueue::{PriorityQueue, QueueConfig};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(PriorityQueue::with_config(QueueConfig {
//!     blocking: true,
//!     ..QueueConfig::default()
//! }));
//!
//! // Consumers block until work arrives.
//! let workers: Vec<_> = (0..2)
//!     .map(|_| {
//!         let queue = Arc::clone(&queue);
//!         thread::spawn(move || {
//!             let entry = queue.pop().unwrap().unwrap();
//!             (entry.priority(), entry.into_value())
//!         })
//!     })
//!     .collect();
//!
//! queue.insert("routine maintenance", 10).unwrap();
//! queue.insert("pager alert", 1).unwrap();
//!
//! for worker in workers {
//!     let (priority, job) = worker.join().unwrap();
//!     println!("handled '{}' at priority {}", job, priority);
//! }
//! ```

mod entry;
mod error;
mod internal;
mod iter;
mod queue;
mod types;

pub use entry::Entry;
pub use error::{QueueError, QueueResult};
pub use iter::{QueueIter, QueueView};
pub use queue::{PeekRef, PriorityQueue};
pub use types::{QueueConfig, QueueStats, DEFAULT_CAPACITY};

#[cfg(test)]
mod tests;
