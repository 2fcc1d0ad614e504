//! Session history of past analyses, most recent first.

use crate::domain::{AnalysisResult, HistoryEntry, ProviderKind};
use chrono::Local;
use std::collections::VecDeque;

/// Number of entries kept by the presentation client.
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded in-memory history. New entries go to the front; the oldest falls off the back.
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a successful analysis, stamped with the current local time.
    pub fn record(&mut self, text: &str, provider: ProviderKind, result: AnalysisResult) {
        self.push(HistoryEntry {
            text: text.to_string(),
            provider,
            result,
            timestamp: Local::now(),
        });
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries in display order (newest first).
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::new()
    }
}
