//! `[site]` section configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site information needed to rewrite feeds and sitemaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site base URL (e.g., "https://example.com").
    pub url: Option<String>,
}

impl SiteConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Site URL, treating an empty string as absent.
    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// `url` must be an absolute URL with scheme (e.g., `https://example.com`).
    pub fn diagnose(&self, diag: &mut ConfigDiagnostics) {
        let Some(url) = self.url() else {
            return;
        };
        if url::Url::parse(url).is_err() {
            diag.warn_with_hint(
                Self::URL,
                format!("invalid URL: {url:?}"),
                "use a full URL with scheme, e.g. \"https://example.com\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_site_url() {
        let config = test_parse_config("[site]\nurl = \"https://site.example/\"");
        assert_eq!(config.site.url(), Some("https://site.example/"));
    }

    #[test]
    fn test_diagnose_invalid_url() {
        let site = SiteConfig {
            url: Some("site.example".into()),
        };
        let mut diag = ConfigDiagnostics::new();
        site.diagnose(&mut diag);
        assert_eq!(diag.len(), 1);

        let site = SiteConfig {
            url: Some("https://site.example".into()),
        };
        let mut diag = ConfigDiagnostics::new();
        site.diagnose(&mut diag);
        assert!(diag.is_empty());
    }
}
