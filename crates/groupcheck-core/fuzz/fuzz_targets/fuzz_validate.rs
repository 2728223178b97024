//! Fuzz target for the validator.
//!
//! `validate_bytes()` must never panic: invalid UTF-8 is an error, and any
//! decodable text yields findings whose spans lie inside the input.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(findings) = groupcheck_core::validate_bytes(data, ()) {
        for finding in findings {
            assert!(!finding.span.is_empty());
            assert!(finding.span.end <= data.len());
        }
    }
});
