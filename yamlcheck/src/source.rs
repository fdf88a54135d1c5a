//! File reading and directory discovery.
//!
//! Reads are bounded: `Read::take` caps the bytes pulled from the handle
//! so the size check and the read are the same operation, and oversized
//! or non-UTF-8 files fail the check instead of aborting the run. The
//! handle is scoped to the read and released on both paths.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::CheckConfig;
use crate::error::{CheckError, CheckErrorKind};

/// Directories never descended into during discovery.
pub const SKIP_DIRS: &[&str] = &["target", "node_modules", ".git", "vendor"];

/// Result of attempting to read a file for checking.
pub enum ReadOutcome {
    /// File was read successfully; contains the UTF-8 content.
    Ok(String),
    /// File could not be read; contains the check error.
    Err(CheckError),
}

/// Read a file with a bounded streaming read, enforcing `max_file_size`.
///
/// Returns `ReadOutcome::Err` if the file cannot be opened or read, if it
/// exceeds `max_file_size`, or if the content is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> ReadOutcome {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return ReadOutcome::Err(CheckError::new(
                path,
                CheckErrorKind::Io,
                format!("failed to open {}: {e}", path.display()),
            ));
        }
    };

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    if let Err(e) = file.take(max_file_size + 1).read_to_end(&mut buffer) {
        return ReadOutcome::Err(CheckError::new(
            path,
            CheckErrorKind::Io,
            format!("failed to read {}: {e}", path.display()),
        ));
    }

    if buffer.len() as u64 > max_file_size {
        return ReadOutcome::Err(CheckError::new(
            path,
            CheckErrorKind::FileTooLarge,
            format!(
                "{} exceeds maximum file size of {max_file_size} bytes",
                path.display()
            ),
        ));
    }

    match String::from_utf8(buffer) {
        Ok(content) => ReadOutcome::Ok(content),
        Err(e) => ReadOutcome::Err(CheckError::new(
            path,
            CheckErrorKind::InvalidEncoding,
            format!("{} is not valid UTF-8: {e}", path.display()),
        )),
    }
}

fn matches_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    for pattern in exclude_patterns {
        if pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        {
            return true;
        }
    }
    false
}

/// Returns `true` if the entry should be **included** (i.e., is NOT a skip dir).
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Find all YAML files under `root`.
///
/// Returns `(files, errors)`: `files` is sorted and deduplicated;
/// traversal failures (permission denied, loop detected) land in
/// `errors` rather than being silently dropped.
///
/// # Errors
///
/// Returns an error if an exclude pattern is not a valid glob — a usage
/// failure, unlike the per-entry traversal failures above.
pub fn find_yaml_files(
    root: &Path,
    config: &CheckConfig,
) -> anyhow::Result<(Vec<PathBuf>, Vec<CheckError>)> {
    let mut exclude_patterns = Vec::with_capacity(config.exclude.len());
    for pat_str in &config.exclude {
        let pat = Pattern::new(pat_str)
            .with_context(|| format!("invalid exclude glob pattern '{pat_str}'"))?;
        exclude_patterns.push(pat);
    }

    let mut files = Vec::new();
    let mut errors = Vec::new();

    for entry_result in WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                errors.push(CheckError::new(
                    path,
                    CheckErrorKind::Io,
                    format!("directory traversal error: {walk_err}"),
                ));
                continue;
            }
        };

        let file_path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if !matches_yaml_extension(file_path) {
            continue;
        }

        if matches_exclude(file_path, &exclude_patterns) {
            continue;
        }

        files.push(file_path.to_path_buf());
    }

    files.sort();
    files.dedup();
    Ok((files, errors))
}
