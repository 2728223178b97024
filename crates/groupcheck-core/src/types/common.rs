//! Common types shared between the rule engine and callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A byte range in the source SQL string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    /// Byte offset from start of SQL string (inclusive)
    pub start: usize,
    /// Byte offset from start of SQL string (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A rule violation inside one statement, before the caller's label is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Machine-readable rule code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// 1-based ordinal of the statement within the source text
    pub statement_ordinal: usize,

    /// Location of the offending token in the source text
    pub span: Span,
}

impl Violation {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        statement_ordinal: usize,
        span: Span,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            statement_ordinal,
            span,
        }
    }

    /// Attaches the caller-supplied file reference, producing a [`Finding`].
    pub fn into_finding<L>(self, file_reference: L) -> Finding<L> {
        Finding {
            file_reference,
            statement_ordinal: self.statement_ordinal,
            code: self.code,
            message: self.message,
            span: self.span,
        }
    }
}

/// A validation finding reported against one source text.
///
/// `file_reference` is whatever label the caller passed to
/// [`crate::validate`]; it is echoed back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Finding<L = String> {
    /// Opaque caller label (usually a file name)
    pub file_reference: L,

    /// 1-based ordinal of the statement within the source text
    pub statement_ordinal: usize,

    /// Machine-readable rule code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Location of the offending token in the source text
    pub span: Span,
}

impl<L> Finding<L> {
    /// Replaces the file reference, keeping everything else.
    pub fn map_reference<M>(self, f: impl FnOnce(L) -> M) -> Finding<M> {
        Finding {
            file_reference: f(self.file_reference),
            statement_ordinal: self.statement_ordinal,
            code: self.code,
            message: self.message,
            span: self.span,
        }
    }
}

/// Machine-readable rule codes.
pub mod issue_codes {
    pub const LINT_GB_001: &str = "LINT_GB_001";
}
