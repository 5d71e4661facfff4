//! Error types for the replay crate.

use std::path::PathBuf;

/// Errors that can occur while running a corpus replay.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReplayError {
    /// Reading an input or writing a seed failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report line could not be serialized.
    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    /// Writing to the report sink failed.
    #[error("report output failed: {0}")]
    Output(#[from] std::io::Error),
}

impl ReplayError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
