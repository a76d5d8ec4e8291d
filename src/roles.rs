//! The fixed set of logical rename targets and their substitution rules.

use crate::layout::ProjectLayout;
use crate::subst::Substitution;
use std::path::PathBuf;

/// Extension of source files considered by directory-scoped roles.
pub const SOURCE_SUFFIX: &str = ".php";

/// A closed set of logical targets. The rename touches these and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    AppSourceTree,
    BootstrapEntry,
    ConfigApp,
    ConfigAuth,
    ConfigServices,
    PackageManifest,
    FactoriesDirectory,
}

/// A role's resolved filesystem target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single file, rewritten unconditionally if it exists.
    File(PathBuf),
    /// A directory whose matching source files are discovered and rewritten.
    Directory(PathBuf),
}

impl FileRole {
    /// All roles, in workflow execution order.
    pub const ALL: [FileRole; 7] = [
        FileRole::AppSourceTree,
        FileRole::BootstrapEntry,
        FileRole::ConfigApp,
        FileRole::ConfigAuth,
        FileRole::ConfigServices,
        FileRole::PackageManifest,
        FileRole::FactoriesDirectory,
    ];

    /// Resolves the role to a concrete path via the host layout. Pure table
    /// lookup plus path concatenation.
    pub fn target(&self, layout: &dyn ProjectLayout) -> Target {
        match self {
            FileRole::AppSourceTree => Target::Directory(layout.app_path()),
            FileRole::BootstrapEntry => Target::File(layout.bootstrap_path().join("app.php")),
            FileRole::ConfigApp => Target::File(layout.config_path().join("app.php")),
            FileRole::ConfigAuth => Target::File(layout.config_path().join("auth.php")),
            FileRole::ConfigServices => Target::File(layout.config_path().join("services.php")),
            FileRole::PackageManifest => {
                Target::File(layout.base_path().join(layout.manifest_name()))
            }
            FileRole::FactoriesDirectory => {
                Target::Directory(layout.database_path().join("factories"))
            }
        }
    }

    /// Whether an absent target directory is benign rather than a sign the
    /// tool is running outside a project.
    pub fn is_optional(&self) -> bool {
        matches!(self, FileRole::FactoriesDirectory)
    }

    /// The ordered substitution rules for renaming `current` to `new` within
    /// this role's files. Order is significant: rules are applied
    /// sequentially, each over the previous rule's output.
    pub fn rules(&self, current: &str, new: &str) -> Vec<Substitution> {
        match self {
            FileRole::AppSourceTree => vec![
                Substitution::new(
                    format!("namespace {current};"),
                    format!("namespace {new};"),
                ),
                Substitution::new(format!("{current}\\"), format!("{new}\\")),
            ],
            FileRole::BootstrapEntry => vec![
                Substitution::new(format!("{current}\\Http"), format!("{new}\\Http")),
                Substitution::new(format!("{current}\\Console"), format!("{new}\\Console")),
                Substitution::new(
                    format!("{current}\\Exceptions"),
                    format!("{new}\\Exceptions"),
                ),
            ],
            FileRole::ConfigApp => vec![
                Substitution::new(format!("{current}\\Providers"), format!("{new}\\Providers")),
                Substitution::new(
                    format!("{current}\\Http\\Controllers\\"),
                    format!("{new}\\Http\\Controllers\\"),
                ),
            ],
            FileRole::ConfigAuth | FileRole::ConfigServices => vec![Substitution::new(
                format!("{current}\\User"),
                format!("{new}\\User"),
            )],
            // The manifest stores the namespace as a JSON string, so each
            // separator appears doubled and the key ends in an escaped
            // trailing separator.
            FileRole::PackageManifest => vec![Substitution::new(
                format!("{}\\\\", escape_separators(current)),
                format!("{}\\\\", escape_separators(new)),
            )],
            FileRole::FactoriesDirectory => vec![Substitution::new(current, new)],
        }
    }
}

fn escape_separators(namespace: &str) -> String {
    namespace.replace('\\', "\\\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DiskLayout;
    use crate::subst;
    use std::path::Path;

    #[test]
    fn targets_resolve_through_layout() {
        let layout = DiskLayout::new("/p");

        assert_eq!(
            FileRole::AppSourceTree.target(&layout),
            Target::Directory(Path::new("/p/app").to_path_buf())
        );
        assert_eq!(
            FileRole::BootstrapEntry.target(&layout),
            Target::File(Path::new("/p/bootstrap/app.php").to_path_buf())
        );
        assert_eq!(
            FileRole::ConfigAuth.target(&layout),
            Target::File(Path::new("/p/config/auth.php").to_path_buf())
        );
        assert_eq!(
            FileRole::PackageManifest.target(&layout),
            Target::File(Path::new("/p/composer.json").to_path_buf())
        );
        assert_eq!(
            FileRole::FactoriesDirectory.target(&layout),
            Target::Directory(Path::new("/p/database/factories").to_path_buf())
        );
    }

    #[test]
    fn source_tree_rules_cover_declaration_and_prefix() {
        let rules = FileRole::AppSourceTree.rules("App", "Acme");
        let rewritten = subst::apply("namespace App;\nuse App\\Models\\User;", &rules);
        assert_eq!(rewritten, "namespace Acme;\nuse Acme\\Models\\User;");
    }

    #[test]
    fn manifest_rule_uses_doubled_separators() {
        let rules = FileRole::PackageManifest.rules("App", "Acme");
        assert_eq!(rules, vec![Substitution::new("App\\\\", "Acme\\\\")]);

        let manifest = r#"{"psr-4": {"App\\": "app/"}}"#;
        assert_eq!(
            subst::apply(manifest, &rules),
            r#"{"psr-4": {"Acme\\": "app/"}}"#
        );
    }

    #[test]
    fn manifest_rule_escapes_multi_segment_current_root() {
        // A previous rename can leave a separator inside the current root.
        let rules = FileRole::PackageManifest.rules("Acme\\Sub", "Fresh");
        assert_eq!(
            rules,
            vec![Substitution::new("Acme\\\\Sub\\\\", "Fresh\\\\")]
        );
    }

    #[test]
    fn config_rules_target_known_symbols_only() {
        let rules = FileRole::ConfigApp.rules("App", "Acme");
        let content = "App\\Providers\\RouteServiceProvider::class,\nApp\\Support\\Helper";
        let rewritten = subst::apply(content, &rules);
        assert!(rewritten.contains("Acme\\Providers"));
        // Symbols outside the config rule table stay untouched.
        assert!(rewritten.contains("App\\Support\\Helper"));
    }

    #[test]
    fn factories_rule_replaces_bare_token() {
        let rules = FileRole::FactoriesDirectory.rules("App", "Acme");
        assert_eq!(subst::apply("use App\\Models\\User;", &rules), "use Acme\\Models\\User;");
    }

    #[test]
    fn only_factories_directory_is_optional() {
        for role in FileRole::ALL {
            assert_eq!(role.is_optional(), role == FileRole::FactoriesDirectory);
        }
    }
}
