//! Lint output formatting (sqlfluff-style table, JSON and review summary).

use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;
use std::time::Duration;

/// Review-comment body used when no file has findings.
pub const SUCCESS_SUMMARY: &str = "SQL validation successful. Thanks for your contribution!";

/// Per-file lint result used by the formatter.
pub struct FileLintResult {
    pub name: String,
    pub issues: Vec<LintIssue>,
}

/// A finding resolved to line:col.
#[derive(Debug, Clone, Serialize)]
pub struct LintIssue {
    pub line: usize,
    #[serde(rename = "column")]
    pub col: usize,
    pub statement: usize,
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
struct JsonFileResult<'a> {
    file: &'a str,
    violations: &'a [LintIssue],
}

/// Convert a byte offset into a 1-based (line, col) pair.
pub fn offset_to_line_col(sql: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(sql.len());
    let mut line = 1usize;
    let mut col = 1usize;

    for (i, ch) in sql.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}

/// Format lint results as human-readable sqlfluff-style text.
pub fn format_lint_results(results: &[FileLintResult], colored: bool, elapsed: Duration) -> String {
    let mut out = String::new();

    let mut total_pass = 0usize;
    let mut total_fail = 0usize;
    let mut total_violations = 0usize;

    for file in results {
        if file.issues.is_empty() {
            total_pass += 1;
        } else {
            total_fail += 1;
            total_violations += file.issues.len();
        }

        write_file_section(&mut out, file, colored);
    }

    let _ = writeln!(out, "All Finished in {}!", format_elapsed(elapsed));
    let _ = writeln!(
        out,
        "  {} passed. {} failed. {} violations found.",
        count_str(total_pass, colored, Tone::Pass),
        count_str(total_fail, colored, Tone::Fail),
        total_violations
    );

    out
}

fn write_file_section(out: &mut String, file: &FileLintResult, colored: bool) {
    let status = match (file.issues.is_empty(), colored) {
        (true, true) => "PASS".green().to_string(),
        (true, false) => "PASS".to_string(),
        (false, true) => "FAIL".red().to_string(),
        (false, false) => "FAIL".to_string(),
    };

    let _ = writeln!(out, "== [{}] {}", file.name, status);

    // Findings arrive in statement order; a statement may span lines, so
    // re-sort by position for display.
    let mut sorted: Vec<&LintIssue> = file.issues.iter().collect();
    sorted.sort_by_key(|issue| (issue.line, issue.col));

    for issue in sorted {
        let code = if colored {
            issue.code.red().to_string()
        } else {
            issue.code.clone()
        };

        let _ = writeln!(
            out,
            "L:{:>4} | P:{:>4} | {} | statement {} {}",
            issue.line, issue.col, code, issue.statement, issue.message
        );
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.2}s")
    } else if elapsed.as_millis() >= 1 {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{}us", elapsed.as_micros())
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Pass,
    Fail,
}

fn count_str(count: usize, colored: bool, tone: Tone) -> String {
    let s = format!("{count} file{}", if count == 1 { "" } else { "s" });
    if !colored || count == 0 {
        return s;
    }
    match tone {
        Tone::Pass => s.green().to_string(),
        Tone::Fail => s.red().to_string(),
    }
}

/// Format lint results as JSON.
pub fn format_lint_json(results: &[FileLintResult], compact: bool) -> String {
    let json_results: Vec<JsonFileResult<'_>> = results
        .iter()
        .map(|file| JsonFileResult {
            file: &file.name,
            violations: &file.issues,
        })
        .collect();

    if compact {
        serde_json::to_string(&json_results).unwrap_or_default()
    } else {
        serde_json::to_string_pretty(&json_results).unwrap_or_default()
    }
}

/// Format lint results as a plain-text review comment.
///
/// One line per finding, in file then statement order, or a single success
/// line when nothing was found.
pub fn format_lint_summary(results: &[FileLintResult]) -> String {
    let mut out = String::new();

    for file in results {
        for issue in &file.issues {
            let _ = writeln!(
                out,
                "File {} (statement {}) {}",
                file.name, issue.statement, issue.message
            );
        }
    }

    if out.is_empty() {
        out.push_str(SUCCESS_SUMMARY);
        out.push('\n');
    }

    out
}
