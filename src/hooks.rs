//! Post-rename collaborator implementations.
//!
//! The workflow only signals that a rename finished; rebuilding the autoload
//! index and clearing cached configuration belong to the host toolchain.
//! These implementations shell out to it and swallow failures, reporting them
//! on stderr.

use crate::workflow::{AutoloadRegenerator, CacheInvalidator};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Rebuilds the autoload index by running `composer dump-autoload` in the
/// project root.
pub struct ComposerDumpAutoload {
    root: PathBuf,
}

impl ComposerDumpAutoload {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AutoloadRegenerator for ComposerDumpAutoload {
    fn regenerate(&self) {
        run_in(&self.root, "composer", &["dump-autoload"]);
    }
}

/// Invalidates cached configuration by running `php artisan optimize:clear`
/// in the project root.
pub struct ArtisanOptimizeClear {
    root: PathBuf,
}

impl ArtisanOptimizeClear {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CacheInvalidator for ArtisanOptimizeClear {
    fn invalidate(&self) {
        run_in(&self.root, "php", &["artisan", "optimize:clear"]);
    }
}

/// Collaborators that do nothing. Used by tests and `--no-scripts`.
pub struct NoopHooks;

impl AutoloadRegenerator for NoopHooks {
    fn regenerate(&self) {}
}

impl CacheInvalidator for NoopHooks {
    fn invalidate(&self) {}
}

fn run_in(root: &Path, program: &str, args: &[&str]) {
    match Command::new(program).args(args).current_dir(root).status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            eprintln!("warning: `{program} {}` exited with {status}", args.join(" "));
        }
        Err(err) => {
            eprintln!("warning: could not run `{program} {}`: {err}", args.join(" "));
        }
    }
}
