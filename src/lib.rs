//! Timeline-DB: in-memory temporal record store
//!
//! Records are keyed by a business identifier and cover closed ranges of
//! calendar days. Loads arrive as CSV batches; each key's records are
//! reconciled so they always form a sorted, non-overlapping timeline.
//!
//! # Core Concepts
//!
//! - **Temporal records**: a value valid over a day range, open-ended when
//!   the end date is absent
//! - **Reconciliation**: new records update, truncate, or supersede the
//!   records they overlap
//! - **Batched loads**: rows are grouped by key and flushed to the store
//!   once a distinct-key threshold is crossed
//! - **Poisoning**: keys whose rows conflict with each other within one
//!   load contribute nothing from that load
//!
//! # Example
//!
//! ```
//! use timeline_db::prelude::*;
//!
//! # fn main() -> timeline_db::error::Result<()> {
//! let mut store = RecordStore::new();
//! let report = load_reader(
//!     &mut store,
//!     &b"StartDate,EndDate,Delete,Key,Value\n01-01-2023,,false,A,10\n"[..],
//!     &LoadConfig::default(),
//! )?;
//! assert!(!report.has_issues());
//! assert_eq!(store.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod ingest;
pub mod store;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::LoadConfig;
    pub use crate::core::record::TemporalRecord;
    pub use crate::error::{Error, Result};
    pub use crate::ingest::{load_path, load_reader, LoadIssue, LoadReport};
    pub use crate::store::RecordStore;
}
