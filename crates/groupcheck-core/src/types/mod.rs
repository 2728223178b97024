//! Types exchanged between the validator and its callers.
//!
//! [`Violation`] is what a lint rule produces for one statement. The linter
//! attaches the caller's opaque label to turn it into a [`Finding`].

mod common;

pub use common::*;
