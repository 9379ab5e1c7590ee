//! Forward-slash relative path helpers.
//!
//! Zip entry names use `/` regardless of platform, so every path flowing
//! through the pipeline stays a `/`-joined string until the output writer
//! turns it into a filesystem path.

/// Join two relative path fragments with `/`.
///
/// `"."` and the empty string act as identity on the left, matching how
/// the top-level walk starts from `"."`.
pub fn rel_join(base: &str, rest: &str) -> String {
    if base.is_empty() || base == "." {
        rest.to_string()
    } else if rest.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{rest}")
    }
}

/// Directory portion of a `/`-joined path, empty for a bare file name.
pub fn parent_dir(path: &str) -> &str {
    path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}
