//! Path collection backend
//!
//! Uses walkdir for a plain recursive walk, or the ignore crate when ignore
//! files should be honored. Both walk with an explicit stack, so deep trees
//! don't grow the call stack.

use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::model::ScanError;

/// How the tree under the root is walked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// Every entry, hidden and ignored ones included
    #[default]
    Plain,
    /// Skip entries excluded by .gitignore, .ignore and git exclude files
    GitIgnore,
}

/// Collect the root and every path below it.
///
/// Symlinks are followed. A symlink loop is reported as a walk error. A
/// symlink below the root whose target is missing is kept as a path (it
/// never passes the suffix filter) instead of failing the walk.
pub fn collect_paths(root: &Path, mode: WalkMode) -> Result<Vec<PathBuf>, ScanError> {
    let paths = match mode {
        WalkMode::Plain => collect_plain(root)?,
        WalkMode::GitIgnore => collect_gitignore(root)?,
    };
    debug!(root = %root.display(), paths = paths.len(), "walk complete");
    Ok(paths)
}

/// Whether a walk error is a dangling symlink below the root
fn is_dangling_link(path: &Path, root: &Path, err: Option<&io::Error>) -> bool {
    if path == root || err.map(io::Error::kind) != Some(io::ErrorKind::NotFound) {
        return false;
    }
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

fn collect_plain(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                if err.depth() > 0 && is_dangling_link(&path, root, err.io_error()) {
                    debug!(path = %path.display(), "dangling symlink");
                    paths.push(path);
                    continue;
                }
                return Err(ScanError::Walk {
                    path,
                    source: io::Error::from(err),
                });
            }
        };
        paths.push(entry.into_path());
    }

    Ok(paths)
}

/// The innermost path an ignore error refers to, if any
fn ignore_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            ignore_error_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(ignore_error_path),
        _ => None,
    }
}

fn collect_gitignore(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .follow_links(true)
        .require_git(false)
        .ignore(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true);

    let mut paths = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = ignore_error_path(&err).unwrap_or(root).to_path_buf();
                if is_dangling_link(&path, root, err.io_error()) {
                    debug!(path = %path.display(), "dangling symlink");
                    paths.push(path);
                    continue;
                }
                let message = err.to_string();
                return Err(ScanError::Walk {
                    path,
                    source: err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other(message)),
                });
            }
        };
        paths.push(entry.into_path());
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_collect_empty_dir_returns_root() {
        let temp = tempdir().unwrap();
        let paths = collect_paths(temp.path(), WalkMode::Plain).unwrap();
        assert_eq!(paths, vec![temp.path().to_path_buf()]);
    }

    #[test]
    fn test_collect_file_root() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("only.rb");
        File::create(&file).unwrap();

        let paths = collect_paths(&file, WalkMode::Plain).unwrap();
        assert_eq!(paths, vec![file]);
    }

    #[test]
    fn test_collect_nested() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("app/models")).unwrap();
        File::create(temp.path().join("app/models/user.rb")).unwrap();
        File::create(temp.path().join("top.rb")).unwrap();

        let mut paths = collect_paths(temp.path(), WalkMode::Plain).unwrap();
        paths.sort();

        let expected = {
            let mut v = vec![
                temp.path().to_path_buf(),
                temp.path().join("app"),
                temp.path().join("app/models"),
                temp.path().join("app/models/user.rb"),
                temp.path().join("top.rb"),
            ];
            v.sort();
            v
        };
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_collect_plain_includes_hidden_and_ignored() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".gitignore"), "vendor/\n").unwrap();
        fs::create_dir(temp.path().join("vendor")).unwrap();
        File::create(temp.path().join("vendor/gem.rb")).unwrap();
        File::create(temp.path().join(".hidden.rb")).unwrap();

        let paths = collect_paths(temp.path(), WalkMode::Plain).unwrap();
        assert!(paths.contains(&temp.path().join("vendor/gem.rb")));
        assert!(paths.contains(&temp.path().join(".hidden.rb")));
    }

    #[test]
    fn test_collect_gitignore_skips_ignored() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".gitignore"), "vendor/\n").unwrap();
        fs::create_dir(temp.path().join("vendor")).unwrap();
        File::create(temp.path().join("vendor/gem.rb")).unwrap();
        File::create(temp.path().join(".hidden.rb")).unwrap();
        File::create(temp.path().join("app.rb")).unwrap();

        let paths = collect_paths(temp.path(), WalkMode::GitIgnore).unwrap();
        assert!(!paths.contains(&temp.path().join("vendor/gem.rb")));
        assert!(paths.contains(&temp.path().join(".hidden.rb")));
        assert!(paths.contains(&temp.path().join("app.rb")));
        assert!(paths.contains(&temp.path().to_path_buf()));
    }

    #[test]
    fn test_collect_missing_root_fails() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        let err = collect_paths(&missing, WalkMode::Plain).unwrap_err();
        assert!(matches!(err, ScanError::Walk { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn test_collect_gitignore_missing_root_keeps_path_and_kind() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        match collect_paths(&missing, WalkMode::GitIgnore).unwrap_err() {
            ScanError::Walk { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected walk error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_keeps_dangling_symlink() {
        for mode in [WalkMode::Plain, WalkMode::GitIgnore] {
            let temp = tempdir().unwrap();
            File::create(temp.path().join("a.rb")).unwrap();
            let broken = temp.path().join("broken.rb");
            std::os::unix::fs::symlink(temp.path().join("gone"), &broken).unwrap();

            let paths = collect_paths(temp.path(), mode).unwrap();
            assert!(paths.contains(&temp.path().join("a.rb")), "{mode:?}");
            assert!(paths.contains(&broken), "{mode:?}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_dangling_symlink_root_fails() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("gone"), &root).unwrap();

        assert!(collect_paths(&root, WalkMode::Plain).is_err());
        assert!(collect_paths(&root, WalkMode::GitIgnore).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_symlink_loop_fails() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("a/loop")).unwrap();

        let err = collect_paths(temp.path(), WalkMode::Plain).unwrap_err();
        assert!(matches!(err, ScanError::Walk { .. }));
    }
}
