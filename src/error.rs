//! Error types for the review gate.

use std::path::PathBuf;

/// Errors surfaced by the gate. None of them are retried locally; the binary
/// reports them and fails the workflow step.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read event file {}: {source}", .path.display())]
    EventRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event file {}: {source}", .path.display())]
    EventParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read rule configuration {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule configuration {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid rule at position {index}: {reason}")]
    InvalidRule { index: usize, reason: String },

    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
