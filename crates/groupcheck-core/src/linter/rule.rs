//! Lint rule trait.

use crate::statement::Statement;
use crate::types::Violation;

/// A single lint rule that checks one statement's tokens for anti-patterns.
pub trait LintRule: Send + Sync {
    /// Machine-readable rule code (e.g., "LINT_GB_001").
    fn code(&self) -> &'static str;

    /// Short human-readable name (e.g., "Group by position").
    fn name(&self) -> &'static str;

    /// Longer description of what this rule checks.
    fn description(&self) -> &'static str;

    /// Check a single statement and return any violations found.
    fn check(&self, statement: &Statement<'_>) -> Vec<Violation>;
}
