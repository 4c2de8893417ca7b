// File: crates/energy-series/src/error.rs
// Summary: Typed errors for loading results files and composing charts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a series out of a results file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read results file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse results file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("series '{name}' not found in file {}", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("series '{name}' in file {} is malformed: {reason}", path.display())]
    Malformed {
        name: String,
        path: PathBuf,
        reason: String,
    },
}

/// Errors raised by [`crate::compose`].
#[derive(Debug, Error, PartialEq)]
pub enum ComposeError {
    #[error("efficiency factor must be finite and positive, got {0}")]
    InvalidEfficiency(f64),

    #[error("nothing to compose: no scenarios given")]
    NoScenarios,
}
