//! Progress reporting and cooperative cancellation.
//!
//! Long-running work (playlist builds, reconciliation copies) reports
//! `(done, total)` after every step and checks a [`CancelToken`] before the
//! next one, so a host can drive it from a worker thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

/// Receives `(done, total)` after each processed step.
pub trait Progress {
    fn advance(&mut self, done: usize, total: usize);
}

impl<F> Progress for F
where
    F: FnMut(usize, usize),
{
    fn advance(&mut self, done: usize, total: usize) {
        self(done, total)
    }
}

/// A progress sink that ignores every update.
pub fn silent(_done: usize, _total: usize) {}

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Error::Cancelled)` once [`cancel`](Self::cancel) has been called.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}
