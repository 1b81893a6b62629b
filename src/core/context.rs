//! Per-document processing context handed over by the host.

use super::Mode;

/// Describes the document currently being rendered.
///
/// Read-only for rewriters. One context per generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Render mode of the current pass.
    pub mode: Mode,
    /// Output file name, used to decide feed/sitemap applicability.
    pub file_name: String,
    /// Site base URL (e.g. `https://site.example`), if the host knows it.
    pub site_url: Option<String>,
}

impl RenderContext {
    /// Create a context without a site URL.
    pub fn new(mode: Mode, file_name: impl Into<String>) -> Self {
        Self {
            mode,
            file_name: file_name.into(),
            site_url: None,
        }
    }

    /// Shorthand for a deploy-mode context.
    pub fn deploy(file_name: impl Into<String>) -> Self {
        Self::new(Mode::Deploy, file_name)
    }

    /// Attach the site base URL.
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = Some(url.into());
        self
    }

    /// Site URL, treating an empty string as absent.
    #[inline]
    pub fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref().filter(|url| !url.is_empty())
    }
}
