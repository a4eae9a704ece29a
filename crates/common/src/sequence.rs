//! Counter that hands out guest and booking ids.

use serde::{Deserialize, Serialize};

/// Monotonic id counter.
///
/// Starts at 1 and only moves forward. An id handed out once is never
/// handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first id is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id<T: From<u64>>(&mut self) -> T {
        let id = self.next;
        self.next += 1;
        T::from(id)
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) would yield.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
