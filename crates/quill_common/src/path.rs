//! Path helpers shared by the caches and the host adapter.

use std::path::{Component, Path, PathBuf};

/// Lexically normalizes a path: removes `.` segments and folds `..` into
/// the preceding segment. The filesystem is never consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Joins `relative` onto `base` and normalizes the result.
///
/// An absolute `relative` replaces `base`, matching [`Path::join`].
pub fn combine_paths(base: &Path, relative: impl AsRef<Path>) -> PathBuf {
    normalize_path(&base.join(relative))
}

/// Returns `true` when `path` equals `root` or lies anywhere below it.
///
/// Comparison is by whole path components, so `/a/c` covers `/a/c/d.ts`
/// but not `/a/cd/x.ts`.
pub fn is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
