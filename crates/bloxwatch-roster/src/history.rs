//! Bounded activity log ring.

use std::collections::VecDeque;

use bloxwatch_core::types::ActivityLogEntry;

/// Newest-first ring of activity log entries with a fixed capacity.
///
/// Entries are immutable once pushed; the oldest entry is discarded when
/// the ring overflows.
#[derive(Debug)]
pub struct ActivityHistory {
    entries: VecDeque<ActivityLogEntry>,
    limit: usize,
}

impl ActivityHistory {
    /// Creates an empty history with the given capacity.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Prepends an entry, evicting the oldest when over capacity.
    pub fn push(&mut self, entry: ActivityLogEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.limit {
            self.entries.pop_back();
        }
    }

    /// Current entries, newest first.
    pub fn to_vec(&self) -> Vec<ActivityLogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
