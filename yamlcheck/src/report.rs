//! Check report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::CheckError;

/// Result of checking one file.
///
/// Exactly one report is produced per checked file; every failure mode
/// (unreadable file, oversized file, malformed YAML) ends up here rather
/// than aborting the run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// The file that was checked.
    pub file: PathBuf,
    /// Whether the file was read and every YAML document in it parsed.
    pub ok: bool,
    /// Number of YAML documents successfully parsed from the stream.
    /// An empty file is a valid stream of zero documents.
    pub documents: usize,
    /// Failures encountered while reading or parsing the file.
    pub errors: Vec<CheckError>,
}

impl CheckReport {
    /// A report for a file whose whole stream parsed.
    #[must_use]
    pub fn passed(file: impl Into<PathBuf>, documents: usize) -> Self {
        Self {
            file: file.into(),
            ok: true,
            documents,
            errors: Vec::new(),
        }
    }

    /// A report for a file that could not be read at all.
    #[must_use]
    pub fn failed(file: impl Into<PathBuf>, error: CheckError) -> Self {
        Self {
            file: file.into(),
            ok: false,
            documents: 0,
            errors: vec![error],
        }
    }

    /// Number of failures in this report.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }

    /// Render the one-line status for this file.
    ///
    /// `YAML OK` on success, `YAML ERR: <diagnostic>` on failure, where
    /// the diagnostic joins every failure message for the file.
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.ok {
            "YAML OK".to_owned()
        } else {
            let diagnostic = self
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            format!("YAML ERR: {diagnostic}")
        }
    }
}
