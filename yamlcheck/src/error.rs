//! Error types for YAML checking.

use std::path::PathBuf;

use serde::Serialize;

/// The kind of failure that caused a file to fail the check.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum CheckErrorKind {
    /// An I/O error occurred while opening or reading the file.
    Io,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// The file content could not be parsed as valid YAML.
    Syntax,
}

/// A single check failure for one file.
///
/// `Io` and `Syntax` are deliberately distinct kinds even though both
/// surface through the same `YAML ERR:` reporting line — machine
/// consumers of the JSON report can tell a missing file apart from a
/// malformed one, while the printed contract stays unchanged.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
#[non_exhaustive]
pub struct CheckError {
    /// The file path the failure refers to.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: CheckErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl CheckError {
    /// Build an error for `file` with the given kind and message.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, kind: CheckErrorKind, message: String) -> Self {
        Self {
            file: file.into(),
            kind,
            message,
        }
    }
}
