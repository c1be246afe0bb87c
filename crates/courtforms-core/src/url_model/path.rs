//! Filename derivation from a resolved URL.

/// Returns the substring after the last `/` of `url`, verbatim.
///
/// Query strings and percent-escapes are kept as-is, so
/// `https://x/a/f.pdf?v=2` yields `f.pdf?v=2`. A URL ending in `/` yields `""`.
pub fn last_path_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Local filename for a resolved URL, or `None` when the last segment cannot
/// name a file inside the output directory (empty, `.` or `..`).
pub fn derive_filename(url: &str) -> Option<&str> {
    match last_path_segment(url) {
        "" | "." | ".." => None,
        name => Some(name),
    }
}
