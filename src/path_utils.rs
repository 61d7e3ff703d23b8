use std::path::{Path, PathBuf};

/// Normalize a path for prefix and glob matching.
///
/// Strips a leading `./` (or `.\`) component and converts backslashes to
/// forward slashes so matching behaves the same on all platforms. A bare `.`
/// becomes an empty path, which never matches a non-empty prefix.
#[must_use]
pub fn normalize_for_matching(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();

    let stripped = path_str
        .strip_prefix("./")
        .or_else(|| path_str.strip_prefix(".\\"))
        .unwrap_or(&path_str);

    if stripped.is_empty() || stripped == "." {
        return PathBuf::new();
    }

    if stripped.contains('\\') {
        PathBuf::from(stripped.replace('\\', "/"))
    } else {
        PathBuf::from(stripped)
    }
}

/// A path as seen from `base`: the `base` prefix is stripped when `path` lies
/// under it, then the remainder is normalized.
///
/// Exclusion matching and report display both go through this, so a file is
/// reported under the same name it was matched by.
#[must_use]
pub fn normalize_relative(path: &Path, base: &Path) -> PathBuf {
    let relative = path.strip_prefix(base).unwrap_or(path);
    normalize_for_matching(relative)
}
