//! Domain and protocol helpers shared by the HTML and feed rewriters.
//!
//! All helpers are plain string transforms. Nothing here parses or validates
//! a URL: malformed input simply produces a value that fails to match later,
//! so it passes through unrewritten.

/// Secure scheme prefix.
pub const HTTPS: &str = "https://";

/// Fallback scheme prefix for everything that is not explicitly `https://`.
pub const HTTP: &str = "http://";

/// Normalize a configured CDN URL into a bare domain.
///
/// Strips one leading `http://`, `https://` or scheme-less `//`, then one
/// trailing slash.
///
/// # Examples
/// ```ignore
/// clean_domain("https://cdn.example.com/") -> "cdn.example.com"
/// clean_domain("//cdn.example.com")        -> "cdn.example.com"
/// clean_domain("cdn.example.com/static/")  -> "cdn.example.com/static"
/// ```
pub fn clean_domain(url: &str) -> &str {
    let rest = url
        .strip_prefix(HTTPS)
        .or_else(|| url.strip_prefix(HTTP))
        .or_else(|| url.strip_prefix("//"))
        .unwrap_or(url);
    rest.strip_suffix('/').unwrap_or(rest)
}

/// Protocol prefix of `url`: `https://` when it starts with it, else `http://`.
///
/// Root-relative paths and plain `http://` URLs both fall back to `http://`.
#[inline]
pub fn protocol_of(url: &str) -> &'static str {
    if url.starts_with(HTTPS) { HTTPS } else { HTTP }
}

/// Escape regex metacharacters so `s` matches only itself.
#[inline]
pub fn escape_literal(s: &str) -> String {
    regex::escape(s)
}

/// Path portion of a URL, starting at the first `/` after the host.
///
/// - `https://host/a/b?q` -> `/a/b?q`
/// - `//host/a`           -> `/a`
/// - `/a/b`               -> `/a/b` (root-relative is its own path)
///
/// Returns `None` when there is no path to keep (`https://host`), or when the
/// input is neither absolute nor root-relative.
pub fn url_path(url: &str) -> Option<&str> {
    let after_host = if let Some(rest) = url.strip_prefix("//") {
        rest
    } else if url.starts_with('/') {
        return Some(url);
    } else {
        let (_, rest) = url.split_once("://")?;
        rest
    };
    after_host.find('/').map(|idx| &after_host[idx..])
}
