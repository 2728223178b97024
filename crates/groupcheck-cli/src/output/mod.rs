//! Output formatting modules.

pub mod lint;

pub use lint::{
    format_lint_json, format_lint_results, format_lint_summary, FileLintResult, LintIssue,
};
