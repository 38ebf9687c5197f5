//! Ingestion: reading, grouping, and applying record batches

pub mod pipeline;
pub mod report;
pub mod source;

pub use pipeline::BatchPipeline;
pub use report::{LoadIssue, LoadReport, RowField};

use std::io::Read;
use std::path::Path;

use crate::config::LoadConfig;
use crate::error::Result;
use crate::store::RecordStore;

/// Load records from a CSV file into the store.
///
/// Returns the load report on success. A read failure aborts the load with
/// an error; the store keeps whatever earlier flushes committed.
pub fn load_path(store: &mut RecordStore, path: &Path, config: &LoadConfig) -> Result<LoadReport> {
    config.validate()?;
    let mut reader = source::open(path)?;
    run(store, &mut reader, config)
}

/// Load records from any CSV byte source into the store.
pub fn load_reader<R: Read>(
    store: &mut RecordStore,
    input: R,
    config: &LoadConfig,
) -> Result<LoadReport> {
    config.validate()?;
    let mut reader = source::reader(input);
    run(store, &mut reader, config)
}

fn run<R: Read>(
    store: &mut RecordStore,
    reader: &mut csv::Reader<R>,
    config: &LoadConfig,
) -> Result<LoadReport> {
    let mut pipeline = BatchPipeline::new(store, config);
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |pos| pos.line());
        pipeline.note_row_read();
        match source::parse_row(&row, line) {
            Ok(record) => pipeline.push(record, line, source::raw_row(&row)),
            Err(issue) => pipeline.record_issue(issue),
        }
    }
    Ok(pipeline.finish())
}
