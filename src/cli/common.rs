//! Common utilities shared across CLI commands.

use std::path::Path;

use crate::config::CdnifyConfig;
use crate::core::{Mode, RenderContext};

/// Build the render context for one document.
///
/// `file_name` uses `/` separators on every platform so suffix checks like
/// `sitemap.xml` behave the same everywhere.
pub fn render_context(config: &CdnifyConfig, mode: Mode, file_name: &str) -> RenderContext {
    let ctx = RenderContext::new(mode, file_name.replace('\\', "/"));
    match config.site.url() {
        Some(url) => ctx.with_site_url(url),
        None => ctx,
    }
}

/// Path of `path` relative to `root`, as a `/`-separated string.
pub fn relative_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "file")` -> `"1 file"`
/// - `plural_count(5, "file")` -> `"5 files"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
