//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// groupcheck - reject positional GROUP BY references in SQL files
#[derive(Parser, Debug)]
#[command(name = "groupcheck")]
#[command(
    about = "Check SQL files for GROUP BY clauses that use column positions instead of names",
    long_about = None
)]
#[command(version)]
pub struct Args {
    /// SQL files or directories to check (reads from stdin if none provided)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// File listing changed paths, one per line (e.g. `git diff --name-only` output);
    /// only entries ending in .sql are checked
    #[arg(long, value_name = "FILE")]
    pub files_from: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// JSON lint configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated list of rule codes to exclude (e.g., GB01 or LINT_GB_001)
    #[arg(long, value_delimiter = ',')]
    pub exclude_rules: Vec<String>,

    /// Report violations even on lines carrying a `-- noqa` comment
    #[arg(long)]
    pub ignore_noqa: bool,

    /// Print the JSON Schema of the configuration file and exit
    #[arg(long)]
    pub config_schema: bool,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable per-file report
    Table,
    /// JSON output
    Json,
    /// Plain-text summary suitable for a review comment
    Summary,
}
