//! Shared token-slice helpers for lint rules.

use crate::tokenizer::Token;

/// Splits a clause body into comma-separated items at parenthesis depth 0.
///
/// `COALESCE(a, 1), b` yields two items. Consecutive commas yield empty
/// items, and an empty body yields a single empty item.
pub fn split_top_level_items<'a>(tokens: &'a [Token<'a>]) -> Vec<&'a [Token<'a>]> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        if token.is_punct('(') {
            depth += 1;
        } else if token.is_punct(')') {
            depth = depth.saturating_sub(1);
        } else if token.is_punct(',') && depth == 0 {
            items.push(&tokens[start..index]);
            start = index + 1;
        }
    }

    items.push(&tokens[start..]);
    items
}

/// Drops leading and trailing whitespace and comment tokens.
pub fn trim_trivia<'a>(tokens: &'a [Token<'a>]) -> &'a [Token<'a>] {
    let Some(first) = tokens.iter().position(|token| !token.is_trivia()) else {
        return &[];
    };
    let last = tokens
        .iter()
        .rposition(|token| !token.is_trivia())
        .unwrap_or(first);
    &tokens[first..=last]
}
