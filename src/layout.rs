//! Project layout provider.

use crate::error::{RenameError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Host-supplied project layout: the directories and manifest the rename
/// engine operates on, plus the currently configured root namespace.
///
/// Passing the layout in explicitly keeps the engine testable against fake
/// project trees instead of coupling it to a global application instance.
pub trait ProjectLayout {
    /// The application source tree.
    fn app_path(&self) -> PathBuf;

    /// The directory holding the bootstrap entry file.
    fn bootstrap_path(&self) -> PathBuf;

    /// The configuration directory.
    fn config_path(&self) -> PathBuf;

    /// The database directory (parent of the factories directory).
    fn database_path(&self) -> PathBuf;

    /// The project root.
    fn base_path(&self) -> PathBuf;

    /// The package manifest file name, relative to the project root.
    fn manifest_name(&self) -> &str {
        "composer.json"
    }

    /// The root namespace the project is currently configured with.
    fn current_namespace(&self) -> Result<String>;
}

/// A [`ProjectLayout`] rooted at a directory on disk, using the conventional
/// scaffold structure: `app/`, `bootstrap/`, `config/`, `database/`.
///
/// The current namespace is derived from the manifest's `autoload.psr-4`
/// table: the key whose mapped directory is the application source tree.
pub struct DiskLayout {
    root: PathBuf,
}

/// The slice of the package manifest the layout cares about.
#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    autoload: Autoload,
}

#[derive(Deserialize, Default)]
struct Autoload {
    #[serde(rename = "psr-4", default)]
    psr4: BTreeMap<String, MappedDirs>,
}

/// A psr-4 entry maps a namespace prefix to one directory or several.
#[derive(Deserialize)]
#[serde(untagged)]
enum MappedDirs {
    One(String),
    Many(Vec<String>),
}

impl MappedDirs {
    fn covers_app(&self) -> bool {
        let is_app = |dir: &str| Path::new(dir.trim_end_matches('/')) == Path::new("app");
        match self {
            MappedDirs::One(dir) => is_app(dir),
            MappedDirs::Many(dirs) => dirs.iter().any(|dir| is_app(dir)),
        }
    }
}

impl DiskLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn psr4_namespace_for_app(&self, manifest: &Manifest) -> Option<String> {
        manifest
            .autoload
            .psr4
            .iter()
            .find(|(_, dirs)| dirs.covers_app())
            .map(|(namespace, _)| namespace.trim_matches('\\').to_string())
    }
}

impl ProjectLayout for DiskLayout {
    fn app_path(&self) -> PathBuf {
        self.root.join("app")
    }

    fn bootstrap_path(&self) -> PathBuf {
        self.root.join("bootstrap")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config")
    }

    fn database_path(&self) -> PathBuf {
        self.root.join("database")
    }

    fn base_path(&self) -> PathBuf {
        self.root.clone()
    }

    fn current_namespace(&self) -> Result<String> {
        let path = self.base_path().join(self.manifest_name());
        let raw = fs::read_to_string(&path).map_err(|source| RenameError::FileAccess {
            path: path.clone(),
            source,
        })?;
        let manifest: Manifest = serde_json::from_str(&raw)?;

        self.psr4_namespace_for_app(&manifest).ok_or_else(|| {
            RenameError::MissingHostContext(format!(
                "no autoload.psr-4 entry for the app directory in {}",
                path.display()
            ))
        })
    }
}
