//! The rename workflow: validation, discovery and rewriting in a fixed order.

use crate::discovery;
use crate::error::{RenameError, Result};
use crate::layout::ProjectLayout;
use crate::namespace;
use crate::roles::{FileRole, SOURCE_SUFFIX, Target};
use crate::subst;

/// Signals that the host's autoload index should be rebuilt after a rename.
/// Fire-and-forget: implementations own their failure reporting.
pub trait AutoloadRegenerator {
    fn regenerate(&self);
}

/// Signals that the host's cached configuration should be invalidated.
pub trait CacheInvalidator {
    fn invalidate(&self);
}

/// A validated rename request. Immutable once constructed; the current root is
/// computed once per run and never re-derived, even though the rewrites change
/// what is on disk.
#[derive(Debug, Clone)]
pub struct RenameRequest {
    pub current_root: String,
    pub new_root: String,
}

impl RenameRequest {
    /// Validates `new_root` against the identifier grammar and trims enclosing
    /// separators off `current_root`.
    pub fn new(current_root: &str, new_root: &str) -> Result<Self> {
        namespace::validate(new_root)?;

        let current_root = current_root.trim_matches('\\').to_string();
        if current_root.is_empty() {
            return Err(RenameError::MissingHostContext(
                "the project's current root namespace is empty".to_string(),
            ));
        }

        Ok(Self {
            current_root,
            new_root: new_root.to_string(),
        })
    }
}

/// The result of a completed rename.
#[derive(Debug)]
pub struct RenameOutcome {
    pub from: String,
    pub to: String,
    pub files_changed: usize,
}

/// Orchestrates a rename across the fixed set of file roles.
///
/// Execution is strictly sequential with no rollback: a failure after some
/// roles have been rewritten leaves their changes in place.
pub struct RenameWorkflow<'a> {
    layout: &'a dyn ProjectLayout,
    autoload: &'a dyn AutoloadRegenerator,
    cache: &'a dyn CacheInvalidator,
}

impl<'a> RenameWorkflow<'a> {
    pub fn new(
        layout: &'a dyn ProjectLayout,
        autoload: &'a dyn AutoloadRegenerator,
        cache: &'a dyn CacheInvalidator,
    ) -> Self {
        Self {
            layout,
            autoload,
            cache,
        }
    }

    /// Runs the full rename sequence: validate the new token, compute the
    /// current root, rewrite every role in order, then notify collaborators.
    ///
    /// Validation failures abort before any file is touched.
    pub fn run(&self, new_root: &str) -> Result<RenameOutcome> {
        namespace::validate(new_root)?;

        let current = self.layout.current_namespace()?;
        let request = RenameRequest::new(&current, new_root)?;

        let mut files_changed = 0;
        for role in FileRole::ALL {
            files_changed += self.rewrite_role(role, &request)?;
        }

        self.autoload.regenerate();
        self.cache.invalidate();

        Ok(RenameOutcome {
            from: request.current_root,
            to: request.new_root,
            files_changed,
        })
    }

    fn rewrite_role(&self, role: FileRole, request: &RenameRequest) -> Result<usize> {
        let rules = role.rules(&request.current_root, &request.new_root);

        match role.target(self.layout) {
            Target::File(path) => Ok(usize::from(subst::rewrite_file(&path, &rules)?)),
            Target::Directory(dir) => {
                if !dir.is_dir() {
                    if role.is_optional() && dir.parent().is_some_and(|p| p.is_dir()) {
                        return Ok(0);
                    }
                    return Err(RenameError::MissingHostContext(format!(
                        "expected directory {} is absent",
                        dir.display()
                    )));
                }

                let mut changed = 0;
                for path in
                    discovery::sources_containing(&dir, &request.current_root, SOURCE_SUFFIX)
                {
                    if subst::rewrite_file(&path, &rules)? {
                        changed += 1;
                    }
                }
                Ok(changed)
            }
        }
    }
}
