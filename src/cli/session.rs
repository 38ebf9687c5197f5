//! Interactive load/display session

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::config::LoadConfig;
use crate::error::Result;
use crate::ingest::{self, LoadReport};
use crate::store::RecordStore;

/// Column header shown above the record listing.
pub const DISPLAY_HEADER: &str = "StartDate,EndDate,Delete,Key,Value";

/// Interactive loop: show the store, offer a load, repeat until quit.
///
/// Input and output are injected so tests can script a session; the binary
/// wires them to stdin and stdout.
pub struct Session<R, W> {
    store: RecordStore,
    file: PathBuf,
    config: LoadConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(file: PathBuf, config: LoadConfig, input: R, output: W) -> Self {
        Self {
            store: RecordStore::new(),
            file,
            config,
            input,
            output,
        }
    }

    /// Run until the user declines another load or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            display(&self.store, &mut self.output)?;
            write!(self.output, "\nLoad file? (Y/N): ")?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(());
            }
            match answer.trim().to_ascii_uppercase().as_str() {
                "Y" => match ingest::load_path(&mut self.store, &self.file, &self.config) {
                    Ok(outcome) => report(&outcome, &mut self.output)?,
                    Err(err) => {
                        // The store keeps whatever earlier flushes committed.
                        warn!(%err, "load aborted");
                        writeln!(self.output, "Error reading file: {err}")?;
                    }
                },
                "N" => {
                    writeln!(self.output, "Exiting.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid input. Please enter Y or N.")?,
            }
        }
    }

    /// The store accumulated by this session.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

/// Write the store snapshot in display order, or an explicit empty marker.
pub fn display<W: Write>(store: &RecordStore, out: &mut W) -> Result<()> {
    writeln!(out, "\nCurrent Records:")?;
    writeln!(out, "{DISPLAY_HEADER}")?;
    if store.is_empty() {
        writeln!(out, "Store is empty")?;
    } else {
        for record in store.iter() {
            writeln!(out, "{record}")?;
        }
    }
    Ok(())
}

/// Write a load report's issues, if any.
pub fn report<W: Write>(outcome: &LoadReport, out: &mut W) -> Result<()> {
    if !outcome.has_issues() {
        return Ok(());
    }
    writeln!(out, "\nProcessing Errors:")?;
    for issue in &outcome.issues {
        writeln!(out, "{issue}")?;
    }
    Ok(())
}
