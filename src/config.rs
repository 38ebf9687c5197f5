//! Load configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distinct-key flush threshold used when none is given on the command line.
pub const DEFAULT_BATCH_SIZE: usize = 2;

/// Tunables for one load operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Number of distinct pending keys that triggers a flush.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl LoadConfig {
    /// Configuration with an explicit flush threshold.
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Configuration(
                "batch size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
