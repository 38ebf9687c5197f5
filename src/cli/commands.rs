//! CLI commands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_BATCH_SIZE;

/// Timeline-DB CLI
#[derive(Parser)]
#[command(name = "timeline-db")]
#[command(about = "In-memory temporal record store with batched reconciliation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a CSV file once and print the resulting records
    Load {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,
        /// Distinct-key flush threshold
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,
    },
    /// Run the interactive load/display session
    Session {
        /// CSV file offered on each load prompt
        #[arg(short, long)]
        file: PathBuf,
        /// Distinct-key flush threshold
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,
    },
}
