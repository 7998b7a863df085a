//! Error types for the Launchboard domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Only dataset loading can fail; aggregation never does.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all Launchboard operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Dataset errors ---
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset at {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("Dataset {source_name} is missing required column '{column}'")]
    MissingColumn { source_name: String, column: String },

    #[error("Invalid row at line {line} of {source_name}: {reason}")]
    InvalidRow {
        source_name: String,
        line: u64,
        reason: String,
    },

    #[error("Malformed CSV in {source_name}: {reason}")]
    Malformed { source_name: String, reason: String },
}
