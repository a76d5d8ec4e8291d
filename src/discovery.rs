//! Content-filtered recursive file discovery.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily walks `root` and yields regular files whose name satisfies `name`
/// and whose content satisfies `content`.
///
/// Traversal is recursive with no depth limit and sorted by file name, so
/// re-running against an unmodified tree yields the same sequence. A `root`
/// that does not exist yields an empty iterator rather than an error. Files
/// that cannot be read as UTF-8 text never match the content predicate.
pub fn find<N, C>(root: &Path, name: N, content: C) -> impl Iterator<Item = PathBuf> + use<N, C>
where
    N: Fn(&str) -> bool,
    C: Fn(&str) -> bool,
{
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| name(&entry.file_name().to_string_lossy()))
        .filter(move |entry| {
            fs::read_to_string(entry.path())
                .map(|text| content(&text))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
}

/// Yields files under `root` whose name ends with `suffix` and whose content
/// contains `needle` as a literal substring.
pub fn sources_containing(
    root: &Path,
    needle: &str,
    suffix: &str,
) -> impl Iterator<Item = PathBuf> + use<> {
    let needle = needle.to_string();
    let suffix = suffix.to_string();
    find(
        root,
        move |name| name.ends_with(&suffix),
        move |text| text.contains(&needle),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
    }

    #[test]
    fn filters_by_suffix_and_content() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("a.ext"), "uses OldRoot here");
        write_file(&dir.path().join("b.ext"), "nothing relevant");
        write_file(&dir.path().join("c.other"), "uses OldRoot here");

        let found: Vec<_> = sources_containing(dir.path(), "OldRoot", ".ext").collect();

        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("a.ext"));
    }

    #[test]
    fn recurses_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("deep/nested/model.php"), "namespace App;");
        write_file(&dir.path().join("top.php"), "namespace App;");

        let found: Vec<_> = sources_containing(dir.path(), "App", ".php").collect();

        assert_eq!(found.len(), 2);
    }

    #[test]
    fn missing_root_yields_empty_sequence() {
        let dir = TempDir::new().unwrap();
        let absent = dir.path().join("does-not-exist");

        let found: Vec<_> = sources_containing(&absent, "App", ".php").collect();

        assert!(found.is_empty());
    }

    #[test]
    fn traversal_order_is_stable() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("z.php"), "App");
        write_file(&dir.path().join("a.php"), "App");
        write_file(&dir.path().join("m.php"), "App");

        let first: Vec<_> = sources_containing(dir.path(), "App", ".php").collect();
        let second: Vec<_> = sources_containing(dir.path(), "App", ".php").collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn unreadable_content_never_matches() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("binary.php"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
        write_file(&dir.path().join("text.php"), "App");

        let found: Vec<_> = sources_containing(dir.path(), "App", ".php").collect();

        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("text.php"));
    }
}
