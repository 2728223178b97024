//! Inline `-- noqa` suppression directives.
//!
//! A comment whose text starts with `noqa` (`-- noqa`, `/* noqa */`)
//! suppresses every violation reported on the line where the comment
//! starts. `noqa: GB01, LINT_XX_002` limits the suppression to the listed
//! rules. Comments that merely mention noqa are not directives.

use std::collections::{HashMap, HashSet};

use crate::linter::config::canonicalize_rule_code;
use crate::tokenizer::{Token, TokenKind};

#[derive(Debug, Clone)]
enum NoqaDirective {
    All,
    Rules(HashSet<String>),
}

/// `-- noqa` suppression directives indexed by 1-based line number.
#[derive(Debug, Clone, Default)]
pub struct NoqaMap {
    directives: HashMap<usize, NoqaDirective>,
}

impl NoqaMap {
    /// Collects directives from the comment tokens of `sql`.
    pub fn from_tokens(sql: &str, tokens: &[Token<'_>]) -> Self {
        let mut map = Self::default();

        for token in tokens.iter().filter(|token| token.kind == TokenKind::Comment) {
            let Some(parsed) = parse_noqa_comment(token.text) else {
                continue;
            };

            let line = offset_to_line(sql, token.span.start);
            match parsed {
                NoqaDirective::All => map.suppress_all(line),
                NoqaDirective::Rules(rules) => map.suppress_rules(line, rules),
            }
        }

        map
    }

    /// Returns true if `code` is suppressed on `line`.
    pub fn is_suppressed(&self, line: usize, code: &str) -> bool {
        let Some(directive) = self.directives.get(&line) else {
            return false;
        };

        match directive {
            NoqaDirective::All => true,
            NoqaDirective::Rules(rules) => {
                let canonical = canonicalize_rule_code(code)
                    .unwrap_or_else(|| code.trim().to_ascii_uppercase());
                rules.contains(&canonical)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    fn suppress_all(&mut self, line: usize) {
        self.directives.insert(line, NoqaDirective::All);
    }

    fn suppress_rules(&mut self, line: usize, codes: HashSet<String>) {
        match self.directives.get_mut(&line) {
            Some(NoqaDirective::All) => {}
            Some(NoqaDirective::Rules(existing)) => existing.extend(codes),
            None => {
                self.directives.insert(line, NoqaDirective::Rules(codes));
            }
        }
    }
}

fn parse_noqa_comment(comment_text: &str) -> Option<NoqaDirective> {
    let body = comment_text
        .strip_prefix("--")
        .or_else(|| comment_text.strip_prefix("/*"))?;
    let body = body.trim_end().trim_end_matches("*/").trim();

    let marker = body.get(..4)?;
    if !marker.eq_ignore_ascii_case("noqa") {
        return None;
    }
    let suffix = body[4..].trim();
    if suffix.is_empty() {
        return Some(NoqaDirective::All);
    }

    let rule_list = suffix.strip_prefix(':')?;
    let rule_list = rule_list.trim();
    if rule_list.is_empty() {
        return Some(NoqaDirective::All);
    }

    let rules: HashSet<String> = rule_list
        .split(',')
        .map(|item| {
            item.trim()
                .trim_matches(|c: char| matches!(c, '"' | '\'' | '`' | ';'))
        })
        .filter(|item| !item.is_empty())
        .filter_map(canonicalize_rule_code)
        .collect();

    if rules.is_empty() {
        return None;
    }

    Some(NoqaDirective::Rules(rules))
}

/// 1-based line number of a byte offset.
pub fn offset_to_line(sql: &str, offset: usize) -> usize {
    1 + sql
        .as_bytes()
        .iter()
        .take(offset.min(sql.len()))
        .filter(|byte| **byte == b'\n')
        .count()
}
