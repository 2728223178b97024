//! Error types for the validator boundary.
//!
//! # Error Handling Strategy
//!
//! This crate uses two complementary patterns:
//!
//! - [`InputDecodingError`]: the only fatal condition. Raw bytes that are not
//!   valid UTF-8 are rejected before tokenization starts, and no partial
//!   recovery is attempted.
//!
//! - [`crate::types::Finding`]: everything the validator has to say about
//!   decodable SQL. Malformed SQL never produces an error; at worst it
//!   produces no findings.

use thiserror::Error;

/// Source bytes could not be decoded as UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input is not valid UTF-8: invalid byte sequence at offset {valid_up_to}")]
pub struct InputDecodingError {
    /// Number of leading bytes that were valid UTF-8.
    pub valid_up_to: usize,
}

impl From<std::str::Utf8Error> for InputDecodingError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Decodes raw source bytes, failing fast on invalid UTF-8.
pub fn decode_source(bytes: &[u8]) -> Result<&str, InputDecodingError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        assert_eq!(decode_source(b"SELECT 1").unwrap(), "SELECT 1");
    }

    #[test]
    fn test_decode_reports_offset() {
        let err = decode_source(b"SELECT \xff").unwrap_err();
        assert_eq!(err.valid_up_to, 7);
    }

    #[test]
    fn test_display() {
        let err = InputDecodingError { valid_up_to: 3 };
        assert_eq!(
            err.to_string(),
            "input is not valid UTF-8: invalid byte sequence at offset 3"
        );
    }

    #[test]
    fn test_error_trait() {
        let err = InputDecodingError { valid_up_to: 0 };
        let _: &dyn std::error::Error = &err;
    }
}
