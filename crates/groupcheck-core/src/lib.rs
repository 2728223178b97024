//! Token-level SQL validator that rejects positional `GROUP BY` references.
//!
//! The pipeline runs strictly forward: source text is tokenized, tokens are
//! split into statements, each statement's top-level `GROUP BY` clause is
//! located, and the clause items are checked. Nothing is cached between
//! calls, so validating independent texts from several threads needs no
//! coordination.
//!
//! ```
//! let findings = groupcheck_core::validate("SELECT a, COUNT(*) FROM t GROUP BY 1", "q.sql");
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].statement_ordinal, 1);
//! assert_eq!(findings[0].file_reference, "q.sql");
//! ```

pub mod clause;
pub mod error;
pub mod linter;
pub mod statement;
pub mod tokenizer;
pub mod types;

// Re-export main types and functions
pub use clause::{find_clause, ClauseSpan, GROUP_BY};
pub use error::InputDecodingError;
pub use linter::config::LintConfig;
pub use linter::rules::gb_001::check_group_by_indices;
pub use linter::Linter;
pub use statement::{split_statements, Statement};
pub use tokenizer::{tokenize, Token, TokenKind};
pub use types::{issue_codes, Finding, Span, Violation};

/// Validates one source text, reporting every positional `GROUP BY` item.
///
/// `label` is copied into every finding's `file_reference` and is not
/// interpreted in any way. Inline `-- noqa` directives are not applied here;
/// build a [`Linter`] with [`LintConfig::respect_noqa`] to honour them.
pub fn validate<L: Clone>(source: &str, label: L) -> Vec<Finding<L>> {
    Linter::new(LintConfig {
        respect_noqa: false,
        ..LintConfig::default()
    })
    .check(source, label)
}

/// Validates raw bytes, rejecting input that is not UTF-8.
pub fn validate_bytes<L: Clone>(
    source: &[u8],
    label: L,
) -> Result<Vec<Finding<L>>, InputDecodingError> {
    let text = error::decode_source(source)?;
    Ok(validate(text, label))
}
