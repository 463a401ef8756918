//! The seal/freeze primitive for immutable snapshots.
//!
//! A props snapshot is built on a single thread, sealed exactly once, and
//! only then shared with other threads. After sealing, no field may change
//! for the remainder of the snapshot's lifetime, which is what makes sealed
//! snapshots safe to read concurrently without synchronization.
//!
//! Mutating a sealed snapshot is a programming error, not a recoverable
//! condition: every mutation path must call [`Seal::ensure_unsealed`] first,
//! which panics if the seal has been applied. The panic is intended to be
//! caught in testing and development rather than handled at runtime.

use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether the owning value has been frozen.
///
/// Embed one of these in any type that follows the build-then-seal
/// lifecycle. Cloning a `Seal` produces an *unsealed* seal: a copy of a
/// sealed snapshot is a fresh, editable working copy, never a second handle
/// to the frozen original.
#[derive(Debug, Default)]
pub struct Seal {
    sealed: AtomicBool,
}

impl Seal {
    /// Create a new, unsealed seal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sealed: AtomicBool::new(false),
        }
    }

    /// Freeze the owning value.
    ///
    /// Sealing an already-sealed value is a no-op; the "exactly once"
    /// discipline is enforced on the mutation side via
    /// [`ensure_unsealed`](Self::ensure_unsealed).
    pub fn seal(&self) {
        self.sealed.store(true, Ordering::Release);
    }

    /// Whether the owning value has been sealed.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Assert that the owning value may still be mutated.
    ///
    /// # Panics
    ///
    /// Panics if the value has been sealed. This is the invariant-violation
    /// fault described in the concurrency contract: it indicates a bug in
    /// the caller, and there is nothing sensible to recover to.
    pub fn ensure_unsealed(&self) {
        assert!(
            !self.is_sealed(),
            "attempt to mutate a sealed snapshot (snapshots are immutable once shared)"
        );
    }
}

impl Clone for Seal {
    fn clone(&self) -> Self {
        // Copies start unsealed regardless of the source's state.
        Self::new()
    }
}
