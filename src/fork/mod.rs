//! # Forks
//!
//! A [`Fork`] is a binary mutual-exclusion resource shared by two neighbouring
//! philosophers. Holding a fork is represented by a [`ForkGuard`]: the fork is
//! free again as soon as the guard is released or dropped, which is what keeps
//! a cancelled or aborted philosopher from leaving a fork held forever.
//!
//! Waiting is done on a single-permit [`tokio::sync::Semaphore`], so a blocked
//! philosopher is parked, not spinning. Waiters are served in FIFO order, but
//! nothing beyond that is promised about fairness.

pub mod error;
pub mod ring;

pub use error::*;
pub use ring::*;

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::trace;

/// A binary mutual-exclusion resource with instrumentation.
pub struct Fork {
    index: usize,
    permit: Arc<Semaphore>,
    held: AtomicBool,
    holders: AtomicUsize,
    peak_holders: AtomicUsize,
    acquisitions: AtomicUsize,
}

impl Fork {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            permit: Arc::new(Semaphore::new(1)),
            held: AtomicBool::new(false),
            holders: AtomicUsize::new(0),
            peak_holders: AtomicUsize::new(0),
            acquisitions: AtomicUsize::new(0),
        }
    }

    /// Position of this fork in its ring.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Waits until the fork is free, then takes it.
    ///
    /// The returned guard is the only way to release the fork.
    ///
    /// # Panics
    /// Panics if the fork is observed held right after the permit was granted.
    /// That would mean two holders at once, so the free/held invariant is
    /// already broken and continuing would hide it.
    pub async fn acquire(self: &Arc<Self>) -> Result<ForkGuard, ForkError> {
        let permit = self
            .permit
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| ForkError::Closed(self.index))?;

        let was_held = self.held.swap(true, Ordering::SeqCst);
        assert!(!was_held, "fork {} acquired while already held", self.index);

        let holders = self.holders.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_holders.fetch_max(holders, Ordering::SeqCst);
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        trace!(fork = self.index, "Acquired");

        Ok(ForkGuard {
            fork: Arc::clone(self),
            _permit: permit,
        })
    }

    /// `true` while some philosopher holds the fork.
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }

    /// Number of free → held transitions so far.
    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneous holders ever observed. Never above 1.
    pub fn peak_holders(&self) -> usize {
        self.peak_holders.load(Ordering::SeqCst)
    }

    fn mark_free(&self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
        let was_held = self.held.swap(false, Ordering::SeqCst);
        assert!(was_held, "fork {} released while free", self.index);
        trace!(fork = self.index, "Released");
    }
}

impl fmt::Debug for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fork")
            .field("index", &self.index)
            .field("held", &self.is_held())
            .field("acquisitions", &self.acquisitions())
            .finish()
    }
}

/// Proof of holding a [`Fork`].
///
/// Dropping the guard releases the fork and wakes at most one waiter.
#[must_use = "the fork is released as soon as the guard is dropped"]
pub struct ForkGuard {
    fork: Arc<Fork>,
    // Dropped after `Drop::drop` has marked the fork free.
    _permit: OwnedSemaphorePermit,
}

impl ForkGuard {
    pub fn fork(&self) -> &Arc<Fork> {
        &self.fork
    }

    /// Releases the fork now. Same as dropping the guard.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ForkGuard {
    fn drop(&mut self) {
        self.fork.mark_free();
    }
}

impl fmt::Debug for ForkGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForkGuard")
            .field("fork", &self.fork.index)
            .finish()
    }
}
