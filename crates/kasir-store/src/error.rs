//! # Store Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / csv::Error                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in CLI) ← Printed to the operator                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use kasir_core::CoreError;
use thiserror::Error;

/// File storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing, or creating a file or directory failed.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created (permissions)
    /// - Disk full
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid JSON item array.
    #[error("Malformed catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The ledger file has a row that can't be read or written.
    #[error("Malformed ledger {path}: {source}")]
    Ledger {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A business rule failed while committing.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn catalog(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Catalog {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn ledger(path: &Path, source: csv::Error) -> Self {
        StoreError::Ledger {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
