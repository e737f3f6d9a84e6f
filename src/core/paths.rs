//! Path utilities
//!
//! Suffix filtering for scan candidates and '/'-normalized display paths.

use std::path::Path;

/// Default extension allow-list
pub const DEFAULT_SUFFIXES: &[&str] = &["rb"];

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory for display, falling back to
/// the path itself when it is not under root
pub fn display_relative(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => normalize_path(rel),
        _ => normalize_path(path),
    }
}

/// Text after the last '.' of the file name, if the name has a dot.
///
/// Unlike `Path::extension`, a dotfile such as `.rb` yields `rb`.
pub fn file_suffix(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Accept a user-supplied suffix with or without a leading dot
pub fn normalize_suffix(suffix: &str) -> String {
    suffix.strip_prefix('.').unwrap_or(suffix).to_string()
}

/// Whether the file name's suffix is in the allow-list (case-sensitive)
pub fn has_allowed_suffix<S: AsRef<str>>(path: &Path, allowed: &[S]) -> bool {
    match file_suffix(path) {
        Some(ext) => allowed.iter().any(|a| a.as_ref() == ext),
        None => false,
    }
}

/// Whether the path is an existing regular file with an allowed suffix.
///
/// Symlinks are resolved; directories and missing paths never match.
pub fn is_scan_candidate<S: AsRef<str>>(path: &Path, allowed: &[S]) -> bool {
    has_allowed_suffix(path, allowed) && path.is_file()
}
