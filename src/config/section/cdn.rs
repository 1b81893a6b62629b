//! `[cdn]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [cdn]
//! url = "cdn.example.com"   # empty or missing disables rewriting
//! images = true             # anything under /media/
//! css = true                # /assets/ or /themes/ *.css
//! js = true                 # /assets/ or /themes/ *.js
//! fonts = true              # /assets/ or /themes/ woff, woff2, ttf, otf, eot, svg
//! json_feed = false         # feed.json links and feed.json documents
//! xml_feed = false          # feed.xml links and feed.xml documents
//! sitemap = false           # sitemap.xml documents
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::url::clean_domain;

/// CDN rewriting options. Immutable for the lifetime of a rewriting session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// CDN URL or bare domain. Empty or absent disables rewriting.
    pub url: Option<String>,
    /// Rewrite image URLs (any path containing `/media/`).
    pub images: bool,
    /// Rewrite stylesheet URLs.
    pub css: bool,
    /// Rewrite script URLs.
    pub js: bool,
    /// Rewrite web font URLs.
    pub fonts: bool,
    /// Rewrite `feed.json` links and the JSON feed document itself.
    pub json_feed: bool,
    /// Rewrite `feed.xml` links and the XML feed document itself.
    pub xml_feed: bool,
    /// Rewrite the sitemap document.
    pub sitemap: bool,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            url: None,
            images: true,
            css: true,
            js: true,
            fonts: true,
            json_feed: false,
            xml_feed: false,
            sitemap: false,
        }
    }
}

impl CdnConfig {
    pub const URL: FieldPath = FieldPath::new("cdn.url");
    pub const JSON_FEED: FieldPath = FieldPath::new("cdn.json_feed");
    pub const XML_FEED: FieldPath = FieldPath::new("cdn.xml_feed");
    pub const SITEMAP: FieldPath = FieldPath::new("cdn.sitemap");

    /// Config with a CDN URL and every toggle off.
    pub fn disabled_all(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            images: false,
            css: false,
            js: false,
            fonts: false,
            json_feed: false,
            xml_feed: false,
            sitemap: false,
        }
    }

    /// Raw CDN URL, treating an empty string as absent.
    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Bare CDN domain (scheme and trailing slash stripped).
    #[inline]
    pub fn domain(&self) -> Option<&str> {
        self.url().map(clean_domain)
    }

    /// Check if rewriting is switched on at all.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.url().is_some()
    }

    /// Check if any document-type toggle (feeds, sitemap) is on.
    #[inline]
    pub fn any_document_enabled(&self) -> bool {
        self.json_feed || self.xml_feed || self.sitemap
    }

    /// Check if any asset category is on.
    #[inline]
    pub fn any_asset_enabled(&self) -> bool {
        self.images || self.css || self.js || self.fonts
    }

    /// Collect non-fatal problems with the configured values.
    ///
    /// Rewriting never refuses a config; these only surface in the CLI.
    pub fn diagnose(&self, site_url: Option<&str>, diag: &mut ConfigDiagnostics) {
        let Some(url) = self.url() else {
            if self.url.is_some() {
                diag.hint(Self::URL, "empty, CDN rewriting is disabled");
            }
            return;
        };

        if url.chars().any(char::is_whitespace) {
            diag.warn_with_hint(
                Self::URL,
                format!("contains whitespace: {url:?}"),
                "URLs are used as-is, remove the whitespace",
            );
        }

        if let Some((scheme, _)) = url.split_once("://")
            && scheme != "http"
            && scheme != "https"
        {
            diag.warn_with_hint(
                Self::URL,
                format!("unsupported scheme `{scheme}`"),
                "use a bare domain, or an http:// or https:// URL",
            );
        }

        if !self.any_asset_enabled() && !self.any_document_enabled() {
            diag.warn(Self::URL, "is set but every asset and document toggle is off");
        }

        if site_url.is_none() {
            for (enabled, field) in [
                (self.json_feed, Self::JSON_FEED),
                (self.xml_feed, Self::XML_FEED),
                (self.sitemap, Self::SITEMAP),
            ] {
                if enabled {
                    diag.warn_with_hint(
                        field,
                        "is enabled but `site.url` is not configured",
                        "feeds and sitemaps are rewritten relative to the site URL",
                    );
                }
            }
        }
    }
}
