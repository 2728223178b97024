//! Statement splitting over a token sequence.
//!
//! A statement runs from the first token after the previous top-level `;`
//! up to and including its own `;`. Leading whitespace and comments belong
//! to the statement that follows them. Whitespace and comments after the
//! final `;` belong to no statement.

use crate::tokenizer::Token;

/// One statement: a contiguous slice of the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    /// 1-based position of the statement within the source text.
    pub ordinal: usize,
    pub tokens: &'a [Token<'a>],
}

impl<'a> Statement<'a> {
    /// Tokens that are neither whitespace nor comments.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &'a Token<'a>> + 'a {
        self.tokens.iter().filter(|token| !token.is_trivia())
    }

    /// Byte range covered by the statement's tokens.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            _ => 0..0,
        }
    }
}

/// Splits tokens into statements on `;` at parenthesis depth 0.
///
/// A segment becomes a statement if it holds anything besides whitespace
/// and comments, so a trailing statement without a terminator is kept and
/// a bare `;` forms an empty statement of its own.
pub fn split_statements<'a>(tokens: &'a [Token<'a>]) -> Vec<Statement<'a>> {
    let mut statements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        if token.is_punct('(') {
            depth += 1;
        } else if token.is_punct(')') {
            depth = depth.saturating_sub(1);
        } else if token.is_punct(';') && depth == 0 {
            push_segment(&mut statements, &tokens[start..=index]);
            start = index + 1;
        }
    }

    push_segment(&mut statements, &tokens[start..]);
    statements
}

fn push_segment<'a>(statements: &mut Vec<Statement<'a>>, segment: &'a [Token<'a>]) {
    if segment.iter().all(Token::is_trivia) {
        return;
    }
    statements.push(Statement {
        ordinal: statements.len() + 1,
        tokens: segment,
    });
}
