//! CDN rewriting for feeds and sitemaps.
//!
//! Feeds and sitemaps only reference uploads as absolute
//! `<site-url>/media/...` URLs, so a literal prefix replacement is enough.

use std::borrow::Cow;
use std::sync::Arc;

use regex::{NoExpand, Regex};

use crate::config::CdnConfig;
use crate::core::url::{escape_literal, protocol_of};
use crate::core::{DocumentRewriter, RenderContext};
use crate::debug;

/// Document kinds handled by [`FeedRewriter`], detected by file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// `feed.xml`
    XmlFeed,
    /// `feed.json`
    JsonFeed,
    /// `sitemap.xml`
    Sitemap,
}

impl FeedKind {
    /// Detect the document kind from the output file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with("feed.xml") {
            Some(Self::XmlFeed)
        } else if name.ends_with("feed.json") {
            Some(Self::JsonFeed)
        } else if name.ends_with("sitemap.xml") {
            Some(Self::Sitemap)
        } else {
            None
        }
    }

    /// Check if rewriting this kind is switched on.
    pub fn is_enabled(self, config: &CdnConfig) -> bool {
        match self {
            Self::XmlFeed => config.xml_feed,
            Self::JsonFeed => config.json_feed,
            Self::Sitemap => config.sitemap,
        }
    }
}

/// Rewrites `<site-url>/media/` references in feeds and sitemaps.
#[derive(Debug, Clone)]
pub struct FeedRewriter {
    config: Arc<CdnConfig>,
}

impl FeedRewriter {
    pub fn new(config: Arc<CdnConfig>) -> Self {
        Self { config }
    }
}

impl DocumentRewriter for FeedRewriter {
    fn rewrite<'a>(&self, ctx: &RenderContext, content: &'a str) -> Cow<'a, str> {
        if !ctx.mode.is_deploy() {
            return Cow::Borrowed(content);
        }
        let (Some(domain), Some(site_url)) = (self.config.domain(), ctx.site_url()) else {
            return Cow::Borrowed(content);
        };

        match FeedKind::from_file_name(&ctx.file_name) {
            Some(kind) if kind.is_enabled(&self.config) => {}
            _ => return Cow::Borrowed(content),
        }

        let site_url = site_url.strip_suffix('/').unwrap_or(site_url);
        let source = format!("{}/media/", escape_literal(site_url));
        let replacement = format!("{}{}/media/", protocol_of(site_url), domain);

        let pattern = match Regex::new(&source) {
            Ok(pattern) => pattern,
            Err(e) => {
                debug!("feed"; "cannot match site url {:?}: {}", site_url, e);
                return Cow::Borrowed(content);
            }
        };
        pattern.replace_all(content, NoExpand(&replacement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;

    const SITE: &str = "https://site.example";

    fn rewriter(f: impl FnOnce(&mut CdnConfig)) -> FeedRewriter {
        let mut config = CdnConfig::disabled_all("cdn.example.com");
        f(&mut config);
        FeedRewriter::new(Arc::new(config))
    }

    fn site_ctx(file_name: &str) -> RenderContext {
        RenderContext::deploy(file_name).with_site_url(SITE)
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(FeedKind::from_file_name("feed.xml"), Some(FeedKind::XmlFeed));
        assert_eq!(FeedKind::from_file_name("blog/feed.json"), Some(FeedKind::JsonFeed));
        assert_eq!(FeedKind::from_file_name("sitemap.xml"), Some(FeedKind::Sitemap));
        assert_eq!(FeedKind::from_file_name("rss.xml"), None);
        assert_eq!(FeedKind::from_file_name("index.html"), None);
    }

    #[test]
    fn test_xml_feed() {
        let content = "<enclosure url=\"https://site.example/media/pic.png\"/>";
        let out = rewriter(|c| c.xml_feed = true).rewrite(&site_ctx("feed.xml"), content);
        assert_eq!(out, "<enclosure url=\"https://cdn.example.com/media/pic.png\"/>");
    }

    #[test]
    fn test_disabled_toggle_bypasses() {
        let content = "<enclosure url=\"https://site.example/media/pic.png\"/>";
        let out = rewriter(|c| c.json_feed = true).rewrite(&site_ctx("feed.xml"), content);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, content);
    }

    #[test]
    fn test_json_feed_stays_valid_json() {
        let content = r#"{"items":[{"image":"https://site.example/media/a.jpg","url":"https://site.example/posts/a/"}]}"#;
        let out = rewriter(|c| c.json_feed = true).rewrite(&site_ctx("feed.json"), content);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["items"][0]["image"], "https://cdn.example.com/media/a.jpg");
        assert_eq!(value["items"][0]["url"], "https://site.example/posts/a/");
    }

    #[test]
    fn test_sitemap_replaces_every_occurrence() {
        let content = "<loc>https://site.example/media/a.jpg</loc>\n<loc>https://site.example/media/b.jpg</loc>\n<loc>https://site.example/about/</loc>";
        let out = rewriter(|c| c.sitemap = true).rewrite(&site_ctx("sitemap.xml"), content);
        assert_eq!(
            out,
            "<loc>https://cdn.example.com/media/a.jpg</loc>\n<loc>https://cdn.example.com/media/b.jpg</loc>\n<loc>https://site.example/about/</loc>"
        );
    }

    #[test]
    fn test_protocol_follows_site_url() {
        let content = "http://site.example/media/a.jpg";
        let ctx = RenderContext::deploy("feed.xml").with_site_url("http://site.example/");
        let out = rewriter(|c| {
            c.url = Some("https://cdn.example.com".into());
            c.xml_feed = true;
        })
        .rewrite(&ctx, content);
        assert_eq!(out, "http://cdn.example.com/media/a.jpg");
    }

    #[test]
    fn test_site_url_is_matched_literally() {
        // `.` in the site URL must not match arbitrary characters
        let content = "https://siteXexample/media/a.jpg https://site.example/media/b.jpg";
        let out = rewriter(|c| c.xml_feed = true).rewrite(&site_ctx("feed.xml"), content);
        assert_eq!(
            out,
            "https://siteXexample/media/a.jpg https://cdn.example.com/media/b.jpg"
        );
    }

    #[test]
    fn test_replacement_is_not_expanded() {
        let content = "https://site.example/media/a.jpg";
        let out = rewriter(|c| {
            c.url = Some("cdn.example.com/$1".into());
            c.xml_feed = true;
        })
        .rewrite(&site_ctx("feed.xml"), content);
        assert_eq!(out, "https://cdn.example.com/$1/media/a.jpg");
    }

    #[test]
    fn test_other_hosts_untouched() {
        let content = "https://other.example/media/a.jpg";
        let out = rewriter(|c| c.xml_feed = true).rewrite(&site_ctx("feed.xml"), content);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_bypass_conditions() {
        let content = "https://site.example/media/a.jpg";
        let enabled = rewriter(|c| c.xml_feed = true);

        // Preview modes
        for mode in [Mode::Preview, Mode::InstantPreview] {
            let ctx = RenderContext::new(mode, "feed.xml").with_site_url(SITE);
            assert_eq!(enabled.rewrite(&ctx, content), content);
        }

        // Missing or empty site URL
        assert_eq!(enabled.rewrite(&RenderContext::deploy("feed.xml"), content), content);
        let ctx = RenderContext::deploy("feed.xml").with_site_url("");
        assert_eq!(enabled.rewrite(&ctx, content), content);

        // Missing CDN URL
        let disabled = rewriter(|c| {
            c.url = None;
            c.xml_feed = true;
        });
        assert_eq!(disabled.rewrite(&site_ctx("feed.xml"), content), content);

        // Unknown file
        assert_eq!(enabled.rewrite(&site_ctx("atom.xml"), content), content);
    }
}
