//! Cross-platform path utilities
//!
//! Rule matching and dependency filtering compare paths as text in a few
//! places; these helpers keep that comparison stable across platforms.

use std::path::{Path, PathBuf};

/// Convert a path to a string with forward slashes
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use bundle_adapter::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("app/assets/app.js")), "app/assets/app.js");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
