//! Errors surfaced by CLI commands.

use pageframe_core::PageError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing command output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// Registration or resolution failed.
    #[error(transparent)]
    Page(#[from] PageError),

    /// JSON output could not be written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pages the server may request are absent from the registry.
    #[error("registry is missing {} page(s): {}", .0.len(), .0.join(", "))]
    MissingPages(Vec<String>),
}
