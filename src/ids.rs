//! Identity generation for pet records.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source for records created without an explicit id.
///
/// Starts at 0 and advances by one per draw. Ids are never reused within a
/// process lifetime, but ids of removed records are not reserved either: a
/// caller supplying its own id can still collide with one the sequence
/// handed out earlier.
///
/// Deliberately an owned value rather than a process-wide global, so the
/// component that builds the store decides where it lives and tests can
/// seed it deterministically.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// A sequence starting at 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// A sequence seeded at `n`.
    pub fn starting_at(n: u64) -> Self {
        IdSequence {
            next: AtomicU64::new(n),
        }
    }

    /// Draw the next id, advancing the counter. Safe to call from
    /// concurrent creators: the increment is a single atomic operation, so
    /// two draws never return the same id.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
