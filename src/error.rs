//! Error types for cov-comment.
//!
//! Parsing and aggregation failures abort the run. Rendering and token
//! substitution have no error cases.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoverageError>;

#[derive(Debug, Error)]
pub enum CoverageError {
    /// The summary is missing `"total"`, a category, or has a badly shaped entry
    #[error("malformed coverage summary: entry `{entry}` {reason}")]
    MalformedSummary { entry: String, reason: String },

    #[error("invalid JSON in {what}: {source}")]
    InvalidJson {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The changed-file list could not be obtained from git
    #[error("changed files unavailable: {0}")]
    ChangedFilesUnavailable(String),

    #[error("failed to post pull request comment: {0}")]
    Comment(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl CoverageError {
    pub fn malformed(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        CoverageError::MalformedSummary { entry: entry.into(), reason: reason.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoverageError::Io { path: path.into(), source }
    }

    pub fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        CoverageError::InvalidJson { what: what.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_entry_and_reason() {
        let err = CoverageError::malformed("src/a.js", "is missing the `branches` category");
        assert_eq!(
            err.to_string(),
            "malformed coverage summary: entry `src/a.js` is missing the `branches` category"
        );
    }

    #[test]
    fn test_io_message_includes_path() {
        let err = CoverageError::io(
            "coverage/coverage-summary.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("coverage/coverage-summary.json"));
    }
}
