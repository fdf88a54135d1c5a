//! Output formatting for check reports.
//!
//! Provides plain-text and JSON writers over a slice of reports.
//! Terminal/color concerns stay in the CLI layer.

use std::io::Write;

use crate::report::CheckReport;

/// Write one status line per report: `YAML OK` or `YAML ERR: <diagnostic>`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_text(reports: &[CheckReport], writer: &mut dyn Write) -> anyhow::Result<()> {
    for report in reports {
        writeln!(writer, "{}", report.status_line())?;
    }
    Ok(())
}

/// Write the reports as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(reports: &[CheckReport], writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    writeln!(writer, "{json}")?;
    Ok(())
}
