//! Message identifier sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use super::message::MessageId;

/// Source of strictly increasing message identifiers.
///
/// Share one sequence (behind an `Arc`) between every factory whose
/// messages must be ordered relative to each other.
#[derive(Debug, Default)]
pub struct MessageSequence {
    next: AtomicU64,
}

impl MessageSequence {
    /// Create a sequence whose first identifier is 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a sequence whose first identifier is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Take the next identifier.
    pub fn next_id(&self) -> MessageId {
        MessageId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Peek at the identifier the next call to `next_id` will return.
    pub fn peek(&self) -> MessageId {
        MessageId(self.next.load(Ordering::Relaxed))
    }
}
