//! Error types for Timeline-DB

use thiserror::Error;

/// Result type alias for Timeline-DB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a load operation or the session.
///
/// Recoverable per-row problems are not errors; they are recorded as
/// [`crate::ingest::LoadIssue`] entries and surfaced after the load.
#[derive(Error, Debug)]
pub enum Error {
    /// The record source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader failed mid-stream
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}
