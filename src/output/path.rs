//! Path display for reports: relative to a base directory, forward slashes
//! on every platform.

use std::path::Path;

/// Format a path for display, relative to `base` when it lies under it.
///
/// Returns `"."` when `path` equals `base`.
#[must_use]
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    let relative = base
        .and_then(|base| path.strip_prefix(base).ok())
        .unwrap_or(path);

    let result = normalize_separators(&relative.to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub(crate) fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
