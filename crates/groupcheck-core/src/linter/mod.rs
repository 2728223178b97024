//! SQL linter module.
//!
//! Drives the token pipeline for one source text: tokenize, split into
//! statements, run each enabled rule per statement, drop suppressed
//! violations, then attach the caller's label.

pub mod config;
pub mod helpers;
pub mod noqa;
pub mod rule;
pub mod rules;

use config::LintConfig;
use noqa::{offset_to_line, NoqaMap};
use rule::LintRule;
#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

use crate::statement::split_statements;
use crate::tokenizer::tokenize;
use crate::types::{Finding, Violation};

/// The SQL linter, holding a set of rules and configuration.
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

impl Linter {
    /// Creates a new linter with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        let rules = rules::all_rules()
            .into_iter()
            .filter(|rule| config.is_rule_enabled(rule.code()))
            .collect();
        Self { rules, config }
    }

    /// Returns true if linting is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Codes of the rules this linter runs.
    pub fn rule_codes(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.code()).collect()
    }

    /// Checks one source text, labelling every finding with `label`.
    ///
    /// Findings are ordered by statement ordinal, then by source position.
    pub fn check<L: Clone>(&self, sql: &str, label: L) -> Vec<Finding<L>> {
        self.check_violations(sql)
            .into_iter()
            .map(|violation| violation.into_finding(label.clone()))
            .collect()
    }

    /// Checks one source text and returns label-free violations.
    pub fn check_violations(&self, sql: &str) -> Vec<Violation> {
        if !self.config.enabled || self.rules.is_empty() {
            return Vec::new();
        }

        #[cfg(feature = "tracing")]
        let _span = info_span!("lint_source", bytes = sql.len()).entered();

        let tokens = tokenize(sql);
        let statements = split_statements(&tokens);

        #[cfg(feature = "tracing")]
        debug!(
            tokens = tokens.len(),
            statements = statements.len(),
            "split source into statements"
        );

        let mut violations: Vec<Violation> = statements
            .iter()
            .flat_map(|statement| self.rules.iter().flat_map(move |rule| rule.check(statement)))
            .collect();

        if self.config.respect_noqa {
            let noqa = NoqaMap::from_tokens(sql, &tokens);
            if !noqa.is_empty() {
                violations.retain(|violation| {
                    !noqa.is_suppressed(offset_to_line(sql, violation.span.start), &violation.code)
                });
            }
        }

        violations.sort_by_key(|violation| (violation.statement_ordinal, violation.span.start));
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::issue_codes;

    #[test]
    fn default_linter_runs_group_by_rule() {
        let linter = Linter::default();
        assert!(linter.is_enabled());
        assert_eq!(linter.rule_codes(), vec![issue_codes::LINT_GB_001]);
    }

    #[test]
    fn disabled_rule_is_not_run() {
        let linter = Linter::new(LintConfig {
            disabled_rules: vec!["GB01".to_string()],
            ..LintConfig::default()
        });
        assert!(linter.rule_codes().is_empty());
        assert!(linter.check("SELECT a FROM t GROUP BY 1", "x").is_empty());
    }

    #[test]
    fn master_toggle_disables_everything() {
        let linter = Linter::new(LintConfig {
            enabled: false,
            ..LintConfig::default()
        });
        assert!(linter.check("SELECT a FROM t GROUP BY 1", "x").is_empty());
    }

    #[test]
    fn noqa_suppresses_on_same_line_only() {
        let sql = "SELECT a FROM t GROUP BY 1 -- noqa: GB01\n;SELECT a FROM t GROUP BY 1";
        let findings = Linter::default().check(sql, "x");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].statement_ordinal, 2);
    }

    #[test]
    fn noqa_can_be_ignored() {
        let sql = "SELECT a FROM t GROUP BY 1 -- noqa";
        let linter = Linter::new(LintConfig {
            respect_noqa: false,
            ..LintConfig::default()
        });
        assert_eq!(linter.check(sql, "x").len(), 1);
        assert!(Linter::default().check(sql, "x").is_empty());
    }

    #[test]
    fn label_is_echoed_unchanged() {
        let findings = Linter::default().check("SELECT a FROM t GROUP BY 1", ("repo", 42));
        assert_eq!(findings[0].file_reference, ("repo", 42));
    }
}
