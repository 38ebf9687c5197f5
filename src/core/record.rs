//! The temporal record entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::interval;

/// Date format used by the record source and the display sink.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// A value attached to one business key over a closed range of calendar days.
///
/// `end == None` marks an open-ended record, valid from `start` unbounded
/// into the future. The `tombstone` flag is carried through parsing and
/// display but takes no part in reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalRecord {
    /// Business key grouping records into independent timelines
    pub key: String,
    /// Inclusive first day of coverage
    pub start: NaiveDate,
    /// Inclusive last day of coverage, absent when open-ended
    pub end: Option<NaiveDate>,
    /// Integer payload associated with the range
    pub value: i64,
    /// Deletion marker carried from the input
    pub tombstone: bool,
}

impl TemporalRecord {
    /// Create a record with the tombstone flag cleared.
    pub fn new(
        key: impl Into<String>,
        start: NaiveDate,
        end: Option<NaiveDate>,
        value: i64,
    ) -> Self {
        Self {
            key: key.into(),
            start,
            end,
            value,
            tombstone: false,
        }
    }

    /// Check whether this record's day range intersects another's.
    pub fn overlaps(&self, other: &TemporalRecord) -> bool {
        interval::overlaps(self.start, self.end, other.start, other.end)
    }

    /// Whether the record covers an unbounded future.
    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}

impl fmt::Display for TemporalRecord {
    /// Renders the source field order: `start,end,delete,key,value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self
            .end
            .map(|end| end.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        write!(
            f,
            "{},{},{},{},{}",
            self.start.format(DATE_FORMAT),
            end,
            self.tombstone,
            self.key,
            self.value
        )
    }
}
