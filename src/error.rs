//! Crate-wide error type.
//!
//! The scoring stages themselves are total functions and never fail; errors
//! only arise at the edges (completion validation, snapshot storage, remote
//! submission, config parsing). The CLI wraps these in `anyhow` for context.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    /// The assessment cannot be scored yet.
    #[error("assessment incomplete: {missing} unanswered question(s)")]
    Incomplete { missing: usize },

    /// Submission was requested before any results were computed.
    #[error("no assessment results available")]
    NoResults,

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The submission endpoint answered with a non-success status.
    #[error("submission rejected with HTTP status {status}")]
    SubmissionStatus { status: u16 },

    #[error("submission request failed: {0}")]
    Submission(#[from] reqwest::Error),
}

impl AssessmentError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AssessmentError::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
