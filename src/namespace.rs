//! Namespace token validation.

use crate::error::{RenameError, Result};
use regex::bytes::Regex;

/// Identifier-segment grammar, applied to raw bytes: the first byte must be a
/// letter, underscore, or high byte (>= 0x7f); subsequent bytes may also be
/// digits. Multi-byte UTF-8 characters consist entirely of high bytes, so any
/// non-ASCII character is accepted in any position.
const IDENTIFIER: &str = r"(?-u)^[a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*$";

/// Checks whether the candidate is a valid single-segment root namespace.
///
/// Rejects the empty string, digit-leading strings, and anything containing
/// separators, whitespace or punctuation.
pub fn is_valid(candidate: &str) -> bool {
    Regex::new(IDENTIFIER)
        .expect("invalid regex")
        .is_match(candidate.as_bytes())
}

/// Validates the candidate, returning `InvalidNamespace` on failure.
pub fn validate(candidate: &str) -> Result<()> {
    if is_valid(candidate) {
        Ok(())
    } else {
        Err(RenameError::InvalidNamespace(candidate.to_string()))
    }
}
