//! Configuration for a check run.
//!
//! A single struct covers both the single-file case and directory
//! discovery; the discovery-only fields are ignored when the target is a
//! plain file.

/// Options for a check run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Exclude patterns (glob format), applied during directory discovery.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links during directory discovery.
    ///
    /// **Defaults to `false`** — following symlinks allows escaping the
    /// repository root and reading unrelated files in CI environments.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10_485_760,
            exclude: Vec::new(),
            follow_links: false,
            max_depth: 64,
        }
    }
}
