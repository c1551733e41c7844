//! Path resolution helpers
//!
//! Lexical only: nothing here touches the filesystem, so symlinks are not
//! followed.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically: drop `.` components and fold `..` into the
/// preceding normal component. `..` above the root is discarded; leading
/// `..` of a relative path is kept.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use crules::domain::services::normalize_path;
///
/// assert_eq!(normalize_path(Path::new("/p/./a/../b")), PathBuf::from("/p/b"));
/// assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir.as_os_str()),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Resolve `path` against `base` (when relative) and normalize the result.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Whether `path` lies inside `base` (or equals it), compared component by
/// component after normalization.
pub fn is_subpath(path: &Path, base: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(base))
}

/// Reject empty, blank, root-only, and NUL-containing paths.
pub fn validate_path(path: &str) -> bool {
    if path.trim().is_empty() || path.contains('\0') {
        return false;
    }
    let normalized = normalize_path(Path::new(path));
    normalized.parent().is_some() || !normalized.has_root()
}
