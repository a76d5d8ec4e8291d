//! Sequential literal substitution over whole-file contents.

use crate::error::{RenameError, Result};
use std::fs;
use std::path::Path;

/// A single literal search/replace pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub search: String,
    pub replace: String,
}

impl Substitution {
    /// Creates a new substitution rule.
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
        }
    }
}

/// Applies the rules in order, each rule replacing every non-overlapping
/// occurrence of its search string.
///
/// The passes are sequential: rule *i+1* operates on rule *i*'s output, so a
/// later rule can match text introduced by an earlier replacement, and earlier
/// rules are never re-applied. This ordering is part of the contract, not an
/// implementation detail.
pub fn apply(content: &str, rules: &[Substitution]) -> String {
    rules.iter().fold(content.to_string(), |text, rule| {
        text.replace(&rule.search, &rule.replace)
    })
}

/// Rewrites the file at `path` in place with the given rules.
///
/// A missing file is a silent no-op (`Ok(false)`); callers rely on this for
/// optional targets. Returns whether the content actually changed. The updated
/// content replaces the file wholesale; no backup is kept.
pub fn rewrite_file(path: &Path, rules: &[Substitution]) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }

    let original = fs::read_to_string(path).map_err(|source| RenameError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = apply(&original, rules);
    if updated == original {
        return Ok(false);
    }

    fs::write(path, &updated).map_err(|source| RenameError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}
