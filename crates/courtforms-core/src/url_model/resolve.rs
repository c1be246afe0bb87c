//! Link resolution against the site origin.

/// Resolves a raw `href` to an absolute URL.
///
/// Links starting with `/` are site-relative and get `origin` prepended
/// (a trailing `/` on `origin` is dropped first). Anything else is returned
/// unchanged; it is assumed to be absolute already.
pub fn resolve_link(origin: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}
