//! LINT_GB_001: GROUP BY positional reference.
//!
//! `GROUP BY 1, 2` refers to select-list columns by position, which breaks
//! silently when the select list is reordered. Each bare integer item in a
//! top-level `GROUP BY` clause is reported once.

use crate::clause::{find_clause, ClauseSpan, GROUP_BY};
use crate::linter::helpers::{split_top_level_items, trim_trivia};
use crate::linter::rule::LintRule;
use crate::statement::Statement;
use crate::tokenizer::{Token, TokenKind};
use crate::types::{issue_codes, Violation};
#[cfg(feature = "tracing")]
use tracing::debug;

pub const MESSAGE: &str = "uses a positional index in a GROUP BY clause; use a column name instead";

pub struct GroupByPosition;

impl LintRule for GroupByPosition {
    fn code(&self) -> &'static str {
        issue_codes::LINT_GB_001
    }

    fn name(&self) -> &'static str {
        "Group by position"
    }

    fn description(&self) -> &'static str {
        "GROUP BY items should reference columns by name, not by position."
    }

    fn check(&self, statement: &Statement<'_>) -> Vec<Violation> {
        let Some(span) = find_clause(statement, &GROUP_BY) else {
            return Vec::new();
        };

        #[cfg(feature = "tracing")]
        debug!(
            statement = statement.ordinal,
            tokens = span.tokens.len(),
            "found GROUP BY clause"
        );

        check_group_by_indices(&span)
    }
}

/// Reports every item of a `GROUP BY` clause that is a bare integer.
///
/// Decimal numbers, expressions, quoted names and empty items are not
/// ordinal references and produce nothing.
pub fn check_group_by_indices(span: &ClauseSpan<'_>) -> Vec<Violation> {
    split_top_level_items(span.tokens)
        .into_iter()
        .filter_map(ordinal_reference)
        .map(|token| {
            Violation::new(
                issue_codes::LINT_GB_001,
                MESSAGE,
                span.statement_ordinal,
                token.span,
            )
        })
        .collect()
}

fn ordinal_reference<'a>(item: &'a [Token<'a>]) -> Option<&'a Token<'a>> {
    match trim_trivia(item) {
        [token] if token.kind == TokenKind::Number && is_integer(token.text) => Some(token),
        _ => None,
    }
}

fn is_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}
