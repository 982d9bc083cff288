//! # History Ledger
//!
//! Bounded append-only log of staged-item snapshots.
//!
//! ## Rules
//! - A snapshot is recorded only when it differs by value from the last
//!   recorded entry (no consecutive duplicates).
//! - At most [`HISTORY_CAPACITY`] entries are kept; the oldest entry is
//!   evicted first.
//!
//! The ledger serializes transparently as an array of snapshots, which
//! is exactly the payload of the `staged-history-v1` storage key.

use serde::{Deserialize, Serialize};

use crate::item::StagedItem;
use crate::HISTORY_CAPACITY;

/// Bounded log of staged-item snapshots, newest last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    entries: Vec<Vec<StagedItem>>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        HistoryLedger::default()
    }

    /// Restores a ledger from persisted entries, keeping only the newest
    /// [`HISTORY_CAPACITY`] in case the payload predates the cap.
    pub fn from_entries(mut entries: Vec<Vec<StagedItem>>) -> Self {
        if entries.len() > HISTORY_CAPACITY {
            entries.drain(..entries.len() - HISTORY_CAPACITY);
        }
        HistoryLedger { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Vec<StagedItem>] {
        &self.entries
    }

    /// The most recent snapshot, if any.
    pub fn last(&self) -> Option<&[StagedItem]> {
        self.entries.last().map(Vec::as_slice)
    }

    /// Records a snapshot unless it equals the last recorded entry.
    /// Returns whether the snapshot was appended.
    pub fn record(&mut self, snapshot: &[StagedItem]) -> bool {
        if self.last() == Some(snapshot) {
            return false;
        }
        self.entries.push(snapshot.to_vec());
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.remove(0);
        }
        true
    }

    /// Pops the most recent snapshot.
    pub fn pop(&mut self) -> Option<Vec<StagedItem>> {
        self.entries.pop()
    }
}
