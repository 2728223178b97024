//! groupcheck CLI - reject positional GROUP BY references in SQL files

use groupcheck_cli::cli;
use groupcheck_cli::input;
use groupcheck_cli::output;

use anyhow::{Context, Result};
use clap::Parser;
use groupcheck_core::error::decode_source;
use groupcheck_core::{LintConfig, Linter};
use is_terminal::IsTerminal;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use cli::{Args, OutputFormat};
use output::lint::offset_to_line_col;
use output::{
    format_lint_json, format_lint_results, format_lint_summary, FileLintResult, LintIssue,
};

/// Findings reported.
const EXIT_FAILURE: u8 = 1;
/// Configuration, I/O or decoding error.
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(has_violations) => {
            if has_violations {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("groupcheck: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Checks every input and writes the report.
///
/// Returns whether any finding was reported.
fn run(args: Args) -> Result<bool> {
    if args.config_schema {
        let schema = schemars::schema_for!(LintConfig);
        let rendered =
            serde_json::to_string_pretty(&schema).context("Failed to render config schema")?;
        write_output(&args.output, &rendered)?;
        return Ok(false);
    }

    let started_at = Instant::now();
    let lint_config = build_lint_config(&args)?;
    let linter = Linter::new(lint_config);

    let sources = if args.paths.is_empty() && args.files_from.is_none() {
        vec![input::read_stdin()?]
    } else {
        let discovery = input::discover(&args.paths, args.files_from.as_deref())?;
        if !args.quiet {
            for path in &discovery.missing {
                eprintln!(
                    "groupcheck: warning: skipping {} (listed as changed but not found)",
                    path.display()
                );
            }
        }
        input::read_files(&discovery.files)?
    };

    let mut file_results = Vec::with_capacity(sources.len());
    let mut progress = LintProgressBar::new(sources.len(), args.quiet);

    for source in &sources {
        let sql = decode_source(&source.bytes)
            .with_context(|| format!("Failed to decode {}", source.name))?;

        let issues: Vec<LintIssue> = linter
            .check(sql, source.name.as_str())
            .into_iter()
            .map(|finding| {
                let (line, col) = offset_to_line_col(sql, finding.span.start);
                LintIssue {
                    line,
                    col,
                    statement: finding.statement_ordinal,
                    code: finding.code,
                    message: finding.message,
                }
            })
            .collect();

        file_results.push(FileLintResult {
            name: source.name.clone(),
            issues,
        });
        progress.tick();
    }
    progress.finish();

    let has_violations = file_results.iter().any(|f| !f.issues.is_empty());
    let colored = args.output.is_none() && io::stdout().is_terminal();
    let elapsed = started_at.elapsed();

    let output_str = match args.format {
        OutputFormat::Json => format_lint_json(&file_results, args.compact),
        OutputFormat::Table => format_lint_results(&file_results, colored, elapsed),
        OutputFormat::Summary => format_lint_summary(&file_results),
    };

    write_output(&args.output, &output_str)?;

    Ok(has_violations)
}

/// Loads `--config` (if any) and layers the command-line overrides on top.
fn build_lint_config(args: &Args) -> Result<LintConfig> {
    let mut config = match &args.config {
        Some(path) => load_lint_config(path)?,
        None => LintConfig::default(),
    };

    config
        .disabled_rules
        .extend(args.exclude_rules.iter().map(|rule| rule.trim().to_string()));
    if args.ignore_noqa {
        config.respect_noqa = false;
    }

    Ok(config)
}

fn load_lint_config(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_lint_config(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

fn parse_lint_config(content: &str) -> Result<LintConfig> {
    let config: LintConfig =
        serde_json::from_str(content).context("config must be a JSON object")?;
    Ok(config)
}

struct LintProgressBar {
    enabled: bool,
    total: usize,
    current: usize,
}

impl LintProgressBar {
    const WIDTH: usize = 30;

    fn new(total: usize, quiet: bool) -> Self {
        let enabled = !quiet && total > 1 && io::stderr().is_terminal();
        let progress = Self {
            enabled,
            total,
            current: 0,
        };

        if progress.enabled {
            progress.render();
        }

        progress
    }

    fn tick(&mut self) {
        if !self.enabled {
            return;
        }

        self.current = self.current.saturating_add(1).min(self.total);
        self.render();
    }

    fn finish(&self) {
        if self.enabled {
            eprintln!();
        }
    }

    fn render(&self) {
        let filled = self.current * Self::WIDTH / self.total.max(1);
        let empty = Self::WIDTH - filled;

        eprint!(
            "\rChecking [{:=>filled$}{:empty$}] {}/{}",
            "", "", self.current, self.total
        );
        let _ = io::stderr().flush();
    }
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    } else {
        io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        // Ensure newline at end for terminal output
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lint_config_accepts_camel_case() {
        let config =
            parse_lint_config(r#"{"disabledRules": ["GB01"], "respectNoqa": false}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.disabled_rules, vec!["GB01"]);
        assert!(!config.respect_noqa);
    }

    #[test]
    fn parse_lint_config_defaults_missing_fields() {
        assert_eq!(parse_lint_config("{}").unwrap(), LintConfig::default());
    }

    #[test]
    fn parse_lint_config_rejects_malformed_input() {
        assert!(parse_lint_config(r#""GB01""#).is_err());
        assert!(parse_lint_config(r#"{"enabled": "yes"}"#).is_err());
    }

    #[test]
    fn command_line_overrides_layer_on_config() {
        let args = Args::parse_from(["groupcheck", "--exclude-rules", "GB01", "--ignore-noqa"]);
        let config = build_lint_config(&args).unwrap();
        assert_eq!(config.disabled_rules, vec!["GB01"]);
        assert!(!config.respect_noqa);
        assert!(!config.is_rule_enabled("LINT_GB_001"));
    }
}
