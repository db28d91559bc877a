//! Cooperative cancellation for running batches

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token shared between a batch and its controller
///
/// Every operation resets the token at batch start, so a stale cancel from a
/// previous run never blocks a new one. Polling happens once per file and,
/// in the tile extractor, once per row and once per tile; a single file or
/// tile is never interrupted mid-operation.
///
/// Sharing one token across concurrently running batches is a misuse this
/// design does not guard against: the reset at one batch's start would
/// swallow a cancel aimed at another.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the running batch to stop at its next check point
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Clear a pending stop request; called at the start of every batch
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}
