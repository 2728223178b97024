//! Clause location within a single statement.
//!
//! Only depth-0 tokens (outside any parentheses) take part in clause
//! boundaries, so subqueries and function arguments are never mistaken for
//! the enclosing statement's clauses.

use crate::statement::Statement;
use crate::tokenizer::{Token, TokenKind};

/// Keyword sequence that opens a `GROUP BY` clause.
pub const GROUP_BY: [&str; 2] = ["GROUP", "BY"];

/// Keywords that start the next top-level clause and end the current one.
pub const CLAUSE_TERMINATORS: [&str; 12] = [
    "ORDER",
    "HAVING",
    "LIMIT",
    "UNION",
    "OFFSET",
    "EXCEPT",
    "INTERSECT",
    "WINDOW",
    "QUALIFY",
    "FETCH",
    "WITH",
    "FOR",
];

/// Tokens belonging to one clause, between its keywords and the next clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseSpan<'a> {
    pub statement_ordinal: usize,
    /// Upper-cased clause keywords joined by a space, e.g. `GROUP BY`.
    pub clause_name: String,
    /// Clause body, excluding the opening keywords and the terminator.
    pub tokens: &'a [Token<'a>],
}

/// Finds the first depth-0 occurrence of `clause_keywords` in `statement`.
///
/// Keywords are matched case-insensitively and may be split over several
/// tokens (`GROUP`, `BY`) or fused into one (`GROUP BY`). Any later
/// occurrence of the same keywords is ignored.
pub fn find_clause<'a>(
    statement: &Statement<'a>,
    clause_keywords: &[&str],
) -> Option<ClauseSpan<'a>> {
    if clause_keywords.is_empty() {
        return None;
    }

    let tokens = statement.tokens;
    let body_start = find_keywords_at_depth_zero(tokens, clause_keywords)?;
    let body_end = find_clause_end(tokens, body_start);

    Some(ClauseSpan {
        statement_ordinal: statement.ordinal,
        clause_name: clause_keywords
            .iter()
            .map(|keyword| keyword.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(" "),
        tokens: &tokens[body_start..body_end],
    })
}

/// Returns the index just past the matched keywords.
fn find_keywords_at_depth_zero(tokens: &[Token<'_>], keywords: &[&str]) -> Option<usize> {
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        if token.is_punct('(') {
            depth += 1;
        } else if token.is_punct(')') {
            depth = depth.saturating_sub(1);
        } else if depth == 0 && !token.is_trivia() {
            if let Some(end) = match_keywords(tokens, index, keywords) {
                return Some(end);
            }
        }
    }

    None
}

fn match_keywords(tokens: &[Token<'_>], start: usize, keywords: &[&str]) -> Option<usize> {
    let mut expected = keywords.iter();
    let mut next_keyword = expected.next();

    for (offset, token) in tokens[start..].iter().enumerate() {
        if token.is_trivia() {
            continue;
        }
        if !matches!(token.kind, TokenKind::Keyword | TokenKind::Identifier) {
            return None;
        }

        for word in token.text.split_whitespace() {
            match next_keyword {
                Some(keyword) if word.eq_ignore_ascii_case(keyword) => {
                    next_keyword = expected.next();
                }
                _ => return None,
            }
        }

        if next_keyword.is_none() {
            return Some(start + offset + 1);
        }
    }

    None
}

fn find_clause_end(tokens: &[Token<'_>], body_start: usize) -> usize {
    let mut depth = 0usize;

    for (offset, token) in tokens[body_start..].iter().enumerate() {
        if token.is_punct('(') {
            depth += 1;
        } else if token.is_punct(')') {
            depth = depth.saturating_sub(1);
        } else if depth == 0 && is_clause_terminator(token) {
            return body_start + offset;
        }
    }

    tokens.len()
}

fn is_clause_terminator(token: &Token<'_>) -> bool {
    token.is_punct(';')
        || CLAUSE_TERMINATORS
            .iter()
            .any(|keyword| token.is_word(keyword))
}
