//! Cooperative cancellation for a running decision.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared request to stop deepening.
///
/// The driver only looks at it between root moves, so setting it never
/// interrupts a recursive search in progress.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
