//! # renamespace
//!
//! Renames the root namespace of a scaffolded project: every occurrence of
//! the old root token is replaced with a new one across a fixed set of file
//! roles (application source tree, bootstrap entry file, three configuration
//! files, the package manifest and the factories directory).
//!
//! The engine is built from small pieces:
//! - Validating the proposed token against the identifier grammar
//! - Discovering files by extension and content (lazy, recursive)
//! - Applying ordered literal substitutions, each rule over the previous
//!   rule's output
//! - Resolving logical file roles to concrete paths via a host-supplied
//!   project layout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use renamespace::prelude::*;
//!
//! let layout = DiskLayout::new("./my-project");
//! let outcome = RenameWorkflow::new(&layout, &NoopHooks, &NoopHooks).run("Acme")?;
//!
//! println!("{} -> {} ({} files)", outcome.from, outcome.to, outcome.files_changed);
//! # Ok::<(), renamespace::error::RenameError>(())
//! ```

pub mod discovery;
pub mod error;
pub mod hooks;
pub mod layout;
pub mod namespace;
pub mod roles;
pub mod subst;
pub mod workflow;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{RenameError, Result};
    pub use crate::hooks::{ArtisanOptimizeClear, ComposerDumpAutoload, NoopHooks};
    pub use crate::layout::{DiskLayout, ProjectLayout};
    pub use crate::roles::{FileRole, Target};
    pub use crate::subst::Substitution;
    pub use crate::workflow::{
        AutoloadRegenerator, CacheInvalidator, RenameOutcome, RenameRequest, RenameWorkflow,
    };
}

pub use prelude::*;
