//! Path helpers shared by the route table and the navigator.
//!
//! Matching is exact: no case folding, no trailing-slash trimming, no
//! percent-decoding. `/chat/` and `/chat` are different paths.

/// The path component of a location string, without `?query` or `#hash`.
pub fn path_only(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

/// Strip a deployment prefix from a browser pathname.
///
/// Returns `None` when the pathname lives outside the prefix. The bare
/// prefix (with or without trailing slash) maps to `/`.
pub fn strip_base<'a>(pathname: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(pathname);
    }

    let rest = pathname.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        // "/application" is not under "/app"
        None
    }
}

/// Inverse of [`strip_base`]: the browser pathname for an app path.
pub fn with_base(path: &str, base: &str) -> String {
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base, path)
    }
}

/// Whether `path` is a well-formed absolute app path.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}
