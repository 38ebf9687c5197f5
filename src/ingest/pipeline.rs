//! Batched ingestion: pending groups, conflict poisoning, flushing

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info};

use crate::config::LoadConfig;
use crate::core::record::TemporalRecord;
use crate::ingest::report::{LoadIssue, LoadReport};
use crate::store::RecordStore;

/// Groups incoming records by key and applies them to the store in
/// bounded-size batches.
///
/// Owned by a single load operation. Pending groups not yet flushed are
/// discarded with the pipeline; the store keeps whatever earlier flushes
/// committed.
pub struct BatchPipeline<'a> {
    store: &'a mut RecordStore,
    batch_size: usize,
    pending: BTreeMap<String, Vec<TemporalRecord>>,
    poisoned: HashSet<String>,
    report: LoadReport,
}

impl<'a> BatchPipeline<'a> {
    /// Pipeline writing into `store` with the given flush threshold.
    pub fn new(store: &'a mut RecordStore, config: &LoadConfig) -> Self {
        Self {
            store,
            batch_size: config.batch_size,
            pending: BTreeMap::new(),
            poisoned: HashSet::new(),
            report: LoadReport::default(),
        }
    }

    /// Count one data row read from the source.
    pub fn note_row_read(&mut self) {
        self.report.rows_read += 1;
    }

    /// Record a parse-stage issue.
    pub fn record_issue(&mut self, issue: LoadIssue) {
        self.report.issues.push(issue);
    }

    /// Buffer one parsed record.
    ///
    /// A record for a poisoned key is dropped silently. A new key arriving
    /// while the pending map already holds `batch_size` distinct keys
    /// triggers a flush first. A record overlapping one already pending for
    /// its key records a conflict and poisons the key; the key's earlier
    /// pending records stay buffered until the next flush drops them.
    pub fn push(&mut self, record: TemporalRecord, line: u64, raw: String) {
        if self.poisoned.contains(&record.key) {
            debug!(key = %record.key, line, "dropping record for poisoned key");
            return;
        }

        if self.pending.len() == self.batch_size && !self.pending.contains_key(&record.key) {
            self.flush();
        }

        let group = self.pending.entry(record.key.clone()).or_default();
        if group.iter().any(|pending| pending.overlaps(&record)) {
            self.report.issues.push(LoadIssue::Conflict {
                key: record.key.clone(),
                line,
                raw,
            });
            self.poisoned.insert(record.key);
            return;
        }

        let at = group.partition_point(|pending| pending.start <= record.start);
        group.insert(at, record);
        self.report.rows_buffered += 1;
    }

    /// Apply every non-poisoned pending group to the store and clear the
    /// pending map. The poisoned set survives for the rest of the load.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        {
            let keys: Vec<&String> = pending.keys().collect();
            info!(?keys, "processing batch");
        }

        for (key, group) in pending {
            if self.poisoned.contains(&key) {
                debug!(key = %key, "dropping poisoned group");
                continue;
            }
            self.store.apply_group(&key, group);
        }
        self.report.flushes += 1;
    }

    /// Flush whatever is still pending and hand back the report.
    pub fn finish(mut self) -> LoadReport {
        self.flush();
        self.report
    }
}
