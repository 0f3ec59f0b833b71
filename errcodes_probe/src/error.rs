//! Probe error type.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that end a probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Configuration could not be loaded or validated.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// One or more probed paths failed; details went to the sink.
    #[error("{failed} of {total} paths failed")]
    PathsFailed {
        /// Failed paths.
        failed: usize,
        /// Probed paths.
        total: usize,
    },
}

impl ProbeError {
    /// Error if any of `total` paths failed.
    pub fn check_paths(failed: usize, total: usize) -> Result<(), Self> {
        if failed == 0 {
            Ok(())
        } else {
            Err(Self::PathsFailed { failed, total })
        }
    }
}
