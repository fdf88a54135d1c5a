//! Argument parsing and the top-level run loop.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use yamlcheck::{CheckConfig, output};

/// Default target, matching the workflow file this tool was built to check.
const DEFAULT_TARGET: &str = ".github/workflows/release.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One status line per file: `YAML OK` or `YAML ERR: <diagnostic>`.
    Text,
    /// JSON array of per-file reports.
    Json,
}

/// Check that YAML workflow files parse without syntax errors.
///
/// By default the result is reported on stdout only and the exit status
/// is 0 whether or not the check passed; pass `--strict` to exit 1 on
/// failure instead.
#[derive(Debug, Parser)]
#[command(name = "yamlcheck", version, about)]
struct Cli {
    /// File to check, or a directory to scan for *.yml / *.yaml files.
    #[arg(default_value = DEFAULT_TARGET)]
    path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 1 if any file fails the check.
    #[arg(long)]
    strict: bool,

    /// Maximum file size in bytes.
    #[arg(long, default_value_t = 10_485_760)]
    max_file_size: u64,

    /// Exclude pattern (glob format) for directory scans. Repeatable.
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Maximum directory traversal depth for directory scans.
    #[arg(long, default_value_t = 64)]
    max_depth: usize,

    /// Increase log verbosity (-v: info, -vv: debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse arguments, run the check, and print the report.
///
/// # Errors
///
/// Returns an error for usage failures (e.g. an invalid exclude glob) or
/// if writing the report fails. Check failures are not errors — they are
/// reported on stdout and, with `--strict`, via the exit code.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = CheckConfig::default();
    config.max_file_size = cli.max_file_size;
    config.exclude = cli.exclude;
    config.max_depth = cli.max_depth;

    debug!("checking {}", cli.path.display());
    let reports = yamlcheck::check_path(&cli.path, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => output::write_text(&reports, &mut out)?,
        OutputFormat::Json => output::write_json(&reports, &mut out)?,
    }

    let failed = reports.iter().filter(|r| !r.ok).count();
    debug!("{} file(s) checked, {failed} failed", reports.len());

    if cli.strict && failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
