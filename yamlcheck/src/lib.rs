//! # yamlcheck
//!
//! YAML syntax checker for CI workflow files.
//!
//! Given a file, `yamlcheck` reads it with a bounded read, parses it as a
//! YAML document stream, and produces a [`CheckReport`] whose
//! [`status_line`](CheckReport::status_line) is the one-line contract:
//! `YAML OK` when every document parses, `YAML ERR: <diagnostic>` when
//! reading or parsing fails. No schema validation is applied — any
//! well-formed YAML stream passes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use yamlcheck::{CheckConfig, check_file};
//!
//! let config = CheckConfig::default();
//! let report = check_file(Path::new(".github/workflows/release.yml"), &config);
//! println!("{}", report.status_line());
//! ```

mod config;
mod error;
pub mod output;
mod parse;
mod report;
mod source;

pub use config::CheckConfig;
pub use error::{CheckError, CheckErrorKind};
pub use report::CheckReport;

use std::path::Path;

/// Check a single file.
///
/// This is infallible by contract: every failure mode — missing or
/// unreadable file, oversized file, non-UTF-8 content, malformed YAML —
/// is folded into the returned report rather than aborting the run.
#[must_use]
pub fn check_file(path: &Path, config: &CheckConfig) -> CheckReport {
    let content = match source::read_file_bounded(path, config.max_file_size) {
        source::ReadOutcome::Ok(content) => content,
        source::ReadOutcome::Err(error) => return CheckReport::failed(path, error),
    };

    let (documents, errors) = parse::parse_documents(&content, path);
    if errors.is_empty() {
        CheckReport::passed(path, documents)
    } else {
        CheckReport {
            file: path.to_owned(),
            ok: false,
            documents,
            errors,
        }
    }
}

/// Check a file, or every YAML file under a directory.
///
/// For a non-directory target this always yields exactly one report —
/// including for paths that do not exist, where the report carries an
/// [`CheckErrorKind::Io`] failure. For a directory, `*.yml` / `*.yaml`
/// files beneath it are checked in sorted order, honoring the exclude
/// globs and traversal limits in `config`; traversal failures become
/// failed reports for the affected paths.
///
/// # Errors
///
/// Returns an error only for usage failures: an exclude pattern that is
/// not a valid glob.
pub fn check_path(path: &Path, config: &CheckConfig) -> anyhow::Result<Vec<CheckReport>> {
    if !path.is_dir() {
        return Ok(vec![check_file(path, config)]);
    }

    let (files, walk_errors) = source::find_yaml_files(path, config)?;
    let mut reports: Vec<CheckReport> = walk_errors
        .into_iter()
        .map(|e| CheckReport::failed(e.file.clone(), e))
        .collect();
    reports.extend(files.iter().map(|file| check_file(file, config)));
    Ok(reports)
}
