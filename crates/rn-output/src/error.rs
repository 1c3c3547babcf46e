//! Error types for rn-output.

use rn_core::RnError;
use thiserror::Error;

/// Errors that can occur when reading or writing planner files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field could not be interpreted; `line` is 1-based when known.
    #[error("parse error{}: {message}", .line.map(|l| format!(" on line {l}")).unwrap_or_default())]
    Parse {
        line:    Option<u64>,
        message: String,
    },

    /// The file parsed but its contents are not a valid grid, location
    /// list or matrix.
    #[error(transparent)]
    Network(#[from] RnError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
