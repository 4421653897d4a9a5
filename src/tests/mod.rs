//! Test modules for the priority queue
//!
//! This module organizes the test suites for the queue engine.
//! Tests are organized by functional area for better maintainability.

mod core_functionality;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

static LOGGER: OnceLock<Option<flexi_logger::LoggerHandle>> = OnceLock::new();

/// Install a process-wide test logger once. Diagnostics from the
/// growth, rejection and renumbering paths show up with `--nocapture`.
pub(crate) fn init_test_logging() {
    LOGGER.get_or_init(|| {
        flexi_logger::Logger::try_with_env_or_str("debug")
            .ok()
            .and_then(|logger| logger.start().ok())
    });
}

/// Payload that counts its drops, for verifying the release-exactly-once
/// contract on rejection, pop and queue teardown.
#[derive(Debug)]
pub(crate) struct DropTally {
    drops: Arc<AtomicUsize>,
}

impl DropTally {
    pub(crate) fn new(drops: &Arc<AtomicUsize>) -> Self {
        Self {
            drops: Arc::clone(drops),
        }
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}
