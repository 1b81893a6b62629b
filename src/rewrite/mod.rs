//! CDN rewriters and their hook registration.
//!
//! | Hook                          | Rewriter         |
//! |-------------------------------|------------------|
//! | `Html`                        | [`HtmlRewriter`] |
//! | `Rss`, `JsonFeed`, `Sitemap`  | [`FeedRewriter`] |
//!
//! Both run at [`Priority::EARLIEST`] so later post-processing (minifiers,
//! other plugins) already sees CDN URLs.

mod feed;
mod html;
mod pattern;

pub use feed::{FeedKind, FeedRewriter};
pub use html::HtmlRewriter;
pub use pattern::PatternSet;

use std::sync::Arc;

use crate::config::CdnConfig;
use crate::core::{HookPoint, HookRegistry, Priority};

/// Registration name of the HTML rewriter.
pub const HTML_REWRITER: &str = "cdn-html";
/// Registration name of the feed/sitemap rewriter.
pub const FEED_REWRITER: &str = "cdn-feed";

/// Attach the CDN rewriters to their hooks.
pub fn register(config: Arc<CdnConfig>, registry: &mut HookRegistry) {
    registry.register(
        HookPoint::Html,
        Priority::EARLIEST,
        HTML_REWRITER,
        Arc::new(HtmlRewriter::new(Arc::clone(&config))),
    );

    let feed = Arc::new(FeedRewriter::new(config));
    for hook in [HookPoint::Rss, HookPoint::JsonFeed, HookPoint::Sitemap] {
        registry.register(hook, Priority::EARLIEST, FEED_REWRITER, feed.clone());
    }
}

/// Build a registry holding only the CDN rewriters.
pub fn registry(config: CdnConfig) -> HookRegistry {
    let mut registry = HookRegistry::new();
    register(Arc::new(config), &mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::config::test_parse_config;
    use crate::core::{DocumentRewriter, RenderContext};

    fn test_registry() -> HookRegistry {
        let config = test_parse_config(
            r#"[cdn]
url = "cdn.example.com"
xml_feed = true
sitemap = true"#,
        );
        registry(config.cdn)
    }

    fn tag<'a>(_: &RenderContext, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(format!("{text}<!-- min -->"))
    }

    #[test]
    fn test_register_all_hooks() {
        let registry = test_registry();
        assert_eq!(registry.names(HookPoint::Html), vec![HTML_REWRITER]);
        for hook in [HookPoint::Rss, HookPoint::JsonFeed, HookPoint::Sitemap] {
            assert_eq!(registry.names(hook), vec![FEED_REWRITER]);
        }
    }

    #[test]
    fn test_html_through_registry() {
        let registry = test_registry();
        let ctx = RenderContext::deploy("index.html");
        let out = registry.apply(
            HookPoint::Html,
            &ctx,
            r#"<img src="/media/a.jpg"><link href="/feed.xml">"#,
        );
        assert_eq!(
            out,
            r#"<img src="http://cdn.example.com/media/a.jpg"><link href="http://cdn.example.com/feed.xml">"#
        );
    }

    #[test]
    fn test_feed_through_registry() {
        let registry = test_registry();
        let ctx = RenderContext::deploy("sitemap.xml").with_site_url("https://site.example/");
        let out = registry.apply(
            HookPoint::Sitemap,
            &ctx,
            "<loc>https://site.example/media/a.png</loc>",
        );
        assert_eq!(out, "<loc>https://cdn.example.com/media/a.png</loc>");
    }

    #[test]
    fn test_cdn_rewriters_run_before_later_hooks() {
        let mut registry = HookRegistry::new();
        registry.register(HookPoint::Html, Priority::DEFAULT, "minify", Arc::new(tag));
        register(Arc::new(CdnConfig::disabled_all("cdn.example.com")), &mut registry);

        assert_eq!(registry.names(HookPoint::Html), vec![HTML_REWRITER, "minify"]);
    }

    #[test]
    fn test_cdn_rewriters_precede_any_priority() {
        let mut registry = HookRegistry::new();
        registry.register(HookPoint::Html, Priority(0), "zero", Arc::new(tag));
        registry.register(HookPoint::Html, Priority(i32::MIN + 1), "negative", Arc::new(tag));
        register(Arc::new(CdnConfig::disabled_all("cdn.example.com")), &mut registry);

        assert_eq!(
            registry.names(HookPoint::Html),
            vec![HTML_REWRITER, "negative", "zero"]
        );
    }

    #[test]
    fn test_registered_rewriters_are_shareable() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let registry = test_registry();
        assert_send_sync(&registry);

        let rewriter: &dyn DocumentRewriter = &HtmlRewriter::new(Arc::new(CdnConfig::default()));
        let ctx = RenderContext::deploy("index.html");
        assert_eq!(rewriter.rewrite(&ctx, "<p>"), "<p>");
    }
}
