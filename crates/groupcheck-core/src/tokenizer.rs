//! SQL tokenizer.
//!
//! Splits source text into classified tokens with stable byte spans. The
//! tokenizer never fails: unterminated strings and comments run to the end of
//! the input, and characters it does not recognize become single-character
//! punctuation tokens.
//!
//! String literals, quoted identifiers and comments are each consumed as one
//! token, so nothing inside them can be mistaken for clause structure.

use sqlparser::keywords::ALL_KEYWORDS;

use crate::types::Span;

/// Lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    StringLiteral,
    Comment,
    Operator,
    Punctuation,
    Whitespace,
}

impl TokenKind {
    /// Whitespace and comments carry no SQL structure.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }
}

/// A token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Verbatim source text; keyword case is preserved.
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Returns true if this is a bare word equal to `word`, ignoring case.
    ///
    /// Quoted identifiers never match because their text keeps the quotes.
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self.kind, TokenKind::Keyword | TokenKind::Identifier)
            && self.text.eq_ignore_ascii_case(word)
    }

    /// Returns true if this is the punctuation character `ch`.
    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punctuation
            && self.text.len() == ch.len_utf8()
            && self.text.starts_with(ch)
    }
}

/// Tokenizes the full source text.
pub fn tokenize(sql: &str) -> Vec<Token<'_>> {
    Lexer::new(sql).collect()
}

/// Lazy token iterator over a source string.
///
/// A `Lexer` scans once; build a new one (or call [`tokenize`] again) to
/// rescan the same text.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    sql: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(sql: &'a str) -> Self {
        Self { sql, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.sql[self.pos..];
        let first = rest.chars().next()?;

        let (kind, len) = match first {
            c if c.is_whitespace() => {
                (TokenKind::Whitespace, scan_while(rest, char::is_whitespace))
            }
            '-' if rest.starts_with("--") => (TokenKind::Comment, line_comment_len(rest)),
            '/' if rest.starts_with("/*") => (TokenKind::Comment, block_comment_len(rest)),
            '\'' => (TokenKind::StringLiteral, quoted_len(rest, b'\'')),
            '"' => (TokenKind::Identifier, quoted_len(rest, b'"')),
            '`' => (TokenKind::Identifier, quoted_len(rest, b'`')),
            '$' => match dollar_quoted_len(rest) {
                Some(len) => (TokenKind::StringLiteral, len),
                None => (TokenKind::Punctuation, 1),
            },
            c if c.is_ascii_digit() => (TokenKind::Number, number_len(rest)),
            c if is_word_start(c) => {
                let len = scan_while(rest, is_word_char);
                (classify_word(&rest[..len]), len)
            }
            c if is_operator_char(c) => (TokenKind::Operator, operator_len(rest)),
            c => (TokenKind::Punctuation, c.len_utf8()),
        };

        let start = self.pos;
        self.pos += len;
        Some(Token {
            kind,
            text: &self.sql[start..self.pos],
            span: Span::new(start, self.pos),
        })
    }
}

const MULTI_CHAR_OPERATORS: [&str; 9] = ["->>", "<=", ">=", "<>", "!=", "||", "::", "->", "=>"];

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '|' | '&' | '^' | '~' | ':'
    )
}

fn classify_word(word: &str) -> TokenKind {
    let upper = word.to_ascii_uppercase();
    if ALL_KEYWORDS.binary_search(&upper.as_str()).is_ok() {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

/// Byte length of the leading run of characters matching `pred`.
fn scan_while(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}

fn line_comment_len(s: &str) -> usize {
    s.find('\n').unwrap_or(s.len())
}

/// A block comment ends at the first `*/`; an inner `/*` has no effect.
fn block_comment_len(s: &str) -> usize {
    s[2..].find("*/").map_or(s.len(), |offset| offset + 4)
}

/// Quoted text where a doubled quote is an escaped quote.
fn quoted_len(s: &str, quote: u8) -> usize {
    let bytes = s.as_bytes();
    let mut i = 1usize;

    while i < bytes.len() {
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }

    s.len()
}

/// `$$...$$` or `$tag$...$tag$`. Returns `None` when `s` does not open one.
fn dollar_quoted_len(s: &str) -> Option<usize> {
    let tag_len = s[1..].find('$')?;
    let tag = &s[1..1 + tag_len];
    let valid_tag = tag.chars().next().map_or(true, |c| is_word_start(c))
        && tag.chars().all(|c| c.is_alphanumeric() || c == '_');
    if !valid_tag {
        return None;
    }

    let delimiter = &s[..tag_len + 2];
    let body_start = delimiter.len();
    Some(
        s[body_start..]
            .find(delimiter)
            .map_or(s.len(), |offset| body_start + offset + delimiter.len()),
    )
}

fn number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    if bytes.get(len) == Some(&b'.') && bytes.get(len + 1).is_some_and(u8::is_ascii_digit) {
        len += 1;
        len += bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    }

    len
}

fn operator_len(s: &str) -> usize {
    MULTI_CHAR_OPERATORS
        .iter()
        .find(|op| s.starts_with(*op))
        .map_or(1, |op| op.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text(sql: &str) -> Vec<(TokenKind, &str)> {
        tokenize(sql)
            .into_iter()
            .filter(|token| token.kind != TokenKind::Whitespace)
            .map(|token| (token.kind, token.text))
            .collect()
    }

    #[test]
    fn classifies_basic_select() {
        assert_eq!(
            kinds_and_text("SELECT a, 1 FROM t;"),
            vec![
                (TokenKind::Keyword, "SELECT"),
                (TokenKind::Identifier, "a"),
                (TokenKind::Punctuation, ","),
                (TokenKind::Number, "1"),
                (TokenKind::Keyword, "FROM"),
                (TokenKind::Identifier, "t"),
                (TokenKind::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn keywords_keep_their_case() {
        let tokens = kinds_and_text("group By");
        assert_eq!(
            tokens,
            vec![(TokenKind::Keyword, "group"), (TokenKind::Keyword, "By")]
        );
    }

    #[test]
    fn group_by_is_two_tokens() {
        let tokens = tokenize("GROUP   BY");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_word("group"));
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert!(tokens[2].is_word("by"));
    }

    #[test]
    fn line_comment_is_one_token() {
        let tokens = kinds_and_text("-- GROUP BY 1\nSELECT a");
        assert_eq!(tokens[0], (TokenKind::Comment, "-- GROUP BY 1"));
        assert_eq!(tokens[1], (TokenKind::Keyword, "SELECT"));
    }

    #[test]
    fn block_comment_is_one_token() {
        let tokens = kinds_and_text("/* GROUP BY 1; */ a");
        assert_eq!(tokens[0], (TokenKind::Comment, "/* GROUP BY 1; */"));
        assert_eq!(tokens[1], (TokenKind::Identifier, "a"));
    }

    #[test]
    fn block_comment_ends_at_first_close() {
        let tokens = kinds_and_text("/* models/* generated */ x");
        assert_eq!(tokens[0], (TokenKind::Comment, "/* models/* generated */"));
        assert_eq!(tokens[1], (TokenKind::Identifier, "x"));
    }

    #[test]
    fn block_comment_close_may_follow_open() {
        let tokens = kinds_and_text("/**/ x");
        assert_eq!(tokens[0], (TokenKind::Comment, "/**/"));
        assert_eq!(tokens[1], (TokenKind::Identifier, "x"));
    }

    #[test]
    fn string_with_doubled_quote() {
        let tokens = kinds_and_text("'it''s GROUP BY 1' x");
        assert_eq!(tokens[0], (TokenKind::StringLiteral, "'it''s GROUP BY 1'"));
        assert_eq!(tokens[1], (TokenKind::Identifier, "x"));
    }

    #[test]
    fn unterminated_literals_run_to_end() {
        assert_eq!(
            kinds_and_text("SELECT 'abc"),
            vec![(TokenKind::Keyword, "SELECT"), (TokenKind::StringLiteral, "'abc")]
        );
        assert_eq!(
            kinds_and_text("SELECT /* abc"),
            vec![(TokenKind::Keyword, "SELECT"), (TokenKind::Comment, "/* abc")]
        );
        assert_eq!(kinds_and_text("\"col"), vec![(TokenKind::Identifier, "\"col")]);
    }

    #[test]
    fn quoted_identifiers() {
        assert_eq!(
            kinds_and_text("\"1\" `a``b`"),
            vec![(TokenKind::Identifier, "\"1\""), (TokenKind::Identifier, "`a``b`")]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(kinds_and_text("42"), vec![(TokenKind::Number, "42")]);
        assert_eq!(kinds_and_text("3.14"), vec![(TokenKind::Number, "3.14")]);
        assert_eq!(
            kinds_and_text("1."),
            vec![(TokenKind::Number, "1"), (TokenKind::Punctuation, ".")]
        );
        assert_eq!(kinds_and_text("col1"), vec![(TokenKind::Identifier, "col1")]);
    }

    #[test]
    fn dollar_quoted_body() {
        let tokens = kinds_and_text("$fn$ SELECT 1; $fn$ x");
        assert_eq!(tokens[0], (TokenKind::StringLiteral, "$fn$ SELECT 1; $fn$"));
        assert_eq!(tokens[1], (TokenKind::Identifier, "x"));

        let tokens = kinds_and_text("$$ a; b $$");
        assert_eq!(tokens, vec![(TokenKind::StringLiteral, "$$ a; b $$")]);
    }

    #[test]
    fn positional_parameter_is_not_dollar_quote() {
        assert_eq!(
            kinds_and_text("$1"),
            vec![(TokenKind::Punctuation, "$"), (TokenKind::Number, "1")]
        );
    }

    #[test]
    fn operators() {
        assert_eq!(
            kinds_and_text("a::int <> b || c - d"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "::"),
                (TokenKind::Keyword, "int"),
                (TokenKind::Operator, "<>"),
                (TokenKind::Identifier, "b"),
                (TokenKind::Operator, "||"),
                (TokenKind::Identifier, "c"),
                (TokenKind::Operator, "-"),
                (TokenKind::Identifier, "d"),
            ]
        );
    }

    #[test]
    fn unknown_characters_become_punctuation() {
        assert_eq!(
            kinds_and_text("@ # ?"),
            vec![
                (TokenKind::Punctuation, "@"),
                (TokenKind::Punctuation, "#"),
                (TokenKind::Punctuation, "?"),
            ]
        );
    }

    #[test]
    fn spans_cover_input_without_gaps() {
        let sql = "SELECT é, 'x' -- c\n/* d */ FROM t;";
        let tokens = tokenize(sql);
        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.span.start, expected_start);
            assert!(token.span.end > token.span.start);
            assert_eq!(&sql[token.span.start..token.span.end], token.text);
            expected_start = token.span.end;
        }
        assert_eq!(expected_start, sql.len());
    }

    #[test]
    fn lexer_is_restartable() {
        let sql = "SELECT a FROM t GROUP BY 1";
        let first: Vec<_> = Lexer::new(sql).collect();
        let second = tokenize(sql);
        assert_eq!(first, second);
    }
}
