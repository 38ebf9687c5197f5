//! In-memory record store: one reconciled timeline per business key

mod resolver;

use std::collections::BTreeMap;

use crate::core::record::TemporalRecord;

/// Authoritative mapping from business key to its sorted, non-overlapping
/// records.
///
/// The map keying yields the canonical display order (key, then start)
/// without a separate global sort; each per-key vector is re-sorted by
/// start after every batch application.
#[derive(Debug, Default)]
pub struct RecordStore {
    timelines: BTreeMap<String, Vec<TemporalRecord>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Total number of stored records.
    pub fn len(&self) -> usize {
        self.timelines.values().map(Vec::len).sum()
    }

    /// Keys with at least one record, in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.timelines.keys().map(String::as_str)
    }

    /// Records for one key, sorted by start. Empty when the key is unknown.
    pub fn records_for(&self, key: &str) -> &[TemporalRecord] {
        self.timelines.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Apply one key's batch of pending records through the overlap
    /// resolver. The key's current records are snapshotted once for the
    /// whole group.
    pub(crate) fn apply_group(&mut self, key: &str, group: Vec<TemporalRecord>) {
        if group.is_empty() {
            return;
        }
        let existing = self.timelines.remove(key).unwrap_or_default();
        let merged = resolver::reconcile(existing, group);
        if !merged.is_empty() {
            self.timelines.insert(key.to_string(), merged);
        }
    }

    /// Iterate all records in display order: key, then start.
    pub fn iter(&self) -> impl Iterator<Item = &TemporalRecord> {
        self.timelines.values().flatten()
    }

    /// Flattened snapshot in display order.
    pub fn snapshot(&self) -> Vec<TemporalRecord> {
        self.iter().cloned().collect()
    }
}
