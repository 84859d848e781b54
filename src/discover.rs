//! Source file discovery.
//!
//! Walks the scan root and yields the files worth scanning: right extension,
//! file name not on the ignore list, no ignored directory anywhere in the path
//! below the root, and no `--exclude` glob matching the relative path.

use crate::config::ScanConfig;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Collect the files under `root` to scan, in walk order.
///
/// Symlinked files are scanned; symlinked directories are not descended into.
/// Unreadable directory entries are logged and skipped.
pub fn collect_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if !is_candidate(path, config) {
            continue;
        }
        if is_excluded(path, relative, config) {
            debug!("excluded {}", path.display());
            continue;
        }
        files.push(path.to_path_buf());
    }

    files
}

/// Whether `path` has the configured source extension.
pub fn is_candidate(path: &Path, config: &ScanConfig) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == config.extension)
}

/// Whether a candidate is filtered out by name, directory or glob.
///
/// `relative` is the path below the scan root; directory names above the
/// root never exclude anything.
pub fn is_excluded(path: &Path, relative: &Path, config: &ScanConfig) -> bool {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if config.ignored_files.iter().any(|f| *f == file_name) {
        return true;
    }

    let in_ignored_dir = relative.components().any(|c| match c {
        Component::Normal(segment) => config
            .ignored_dirs
            .iter()
            .any(|d| segment.to_str() == Some(d.as_str())),
        _ => false,
    });
    if in_ignored_dir {
        return true;
    }

    config.exclude.iter().any(|p| p.matches_path(relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "def f():\n    pass\n").unwrap();
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn only_python_files() {
        let config = ScanConfig::default();
        assert!(is_candidate(Path::new("/a/b/mod.py"), &config));
        assert!(!is_candidate(Path::new("/a/b/mod.pyc"), &config));
        assert!(!is_candidate(Path::new("/a/b/README"), &config));
    }

    #[test]
    fn ignored_file_names() {
        let mut config = ScanConfig::default();
        let rel = Path::new("pkg/tests.py");
        assert!(is_excluded(rel, rel, &config));
        let init = Path::new("pkg/__init__.py");
        assert!(!is_excluded(init, init, &config));
        config.skip_init_py();
        assert!(is_excluded(init, init, &config));
    }

    #[test]
    fn ignored_directory_segments() {
        let config = ScanConfig::default();
        for rel in ["app/migrations/0001.py", "tests/helpers.py", ".Trash/old.py"] {
            let p = Path::new(rel);
            assert!(is_excluded(p, p, &config), "{rel}");
        }
        let p = Path::new("app/testsuite/helpers.py");
        assert!(!is_excluded(p, p, &config));
    }

    #[test]
    fn directories_above_root_do_not_exclude() {
        let config = ScanConfig::default();
        let full = Path::new("/home/me/tests/project/app.py");
        assert!(!is_excluded(full, Path::new("app.py"), &config));
    }

    #[test]
    fn exclude_globs() {
        let mut config = ScanConfig::default();
        config.add_excludes(&["vendor/*".to_string()]).unwrap();
        let p = Path::new("vendor/lib/x.py");
        assert!(is_excluded(p, p, &config));
        let p = Path::new("src/x.py");
        assert!(!is_excluded(p, p, &config));
    }

    #[test]
    fn walk_is_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "b.py");
        touch(root, "a.py");
        touch(root, "pkg/c.py");
        touch(root, "pkg/tests/test_c.py");
        touch(root, "pkg/test.py");
        touch(root, "notes.txt");

        let files = collect_files(root, &ScanConfig::default());
        assert_eq!(relative_names(root, &files), ["a.py", "b.py", "pkg/c.py"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_collected() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "real/a.py");
        touch(root, "real/sub/b.py");
        fs::create_dir_all(root.join("proj")).unwrap();
        std::os::unix::fs::symlink(root.join("real/a.py"), root.join("proj/link.py")).unwrap();
        std::os::unix::fs::symlink(root.join("real/sub"), root.join("proj/sub")).unwrap();

        let proj = root.join("proj");
        let files = collect_files(&proj, &ScanConfig::default());
        assert_eq!(relative_names(&proj, &files), ["link.py"]);
    }

    #[test]
    fn single_file_root() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "solo.py");
        let solo = dir.path().join("solo.py");

        let files = collect_files(&solo, &ScanConfig::default());
        assert_eq!(files, [solo]);
    }
}
