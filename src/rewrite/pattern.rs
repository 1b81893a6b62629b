//! Match rules derived from the enabled asset categories.
//!
//! Each enabled category contributes one independent fragment. Fragments are
//! OR-combined into a single matcher that is tested against whole URLs:
//!
//! | Toggle                  | Fragment                                          |
//! |-------------------------|---------------------------------------------------|
//! | `images`                | `/media/`                                         |
//! | `css` / `js` / `fonts`  | `/(?:assets\|themes)/.*\.(?:<exts>)(?:\?.*)?$`    |
//! | `json_feed`             | `feed\.json`                                      |
//! | `xml_feed`              | `feed\.xml`                                       |
//!
//! Extension tokens and the directory shape are separate axes, so enabling
//! fonts alone still yields a single `/assets/` or `/themes/` fragment.

use regex::Regex;

use crate::config::CdnConfig;

const CSS_EXTENSIONS: &[&str] = &["css"];
const JS_EXTENSIONS: &[&str] = &["js"];
const FONT_EXTENSIONS: &[&str] = &["woff", "woff2", "ttf", "otf", "eot", "svg"];

/// Ordered list of match fragments built from a [`CdnConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    fragments: Vec<String>,
}

impl PatternSet {
    /// Build the minimal fragment list for the enabled categories.
    pub fn from_config(config: &CdnConfig) -> Self {
        let mut fragments = Vec::with_capacity(4);

        if config.images {
            fragments.push("/media/".to_string());
        }

        let extensions: Vec<&str> = [
            (config.css, CSS_EXTENSIONS),
            (config.js, JS_EXTENSIONS),
            (config.fonts, FONT_EXTENSIONS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, exts)| exts.iter().copied())
        .collect();

        if !extensions.is_empty() {
            fragments.push(format!(
                r"/(?:assets|themes)/.*\.(?:{})(?:\?.*)?$",
                extensions.join("|")
            ));
        }

        if config.json_feed {
            fragments.push(r"feed\.json".to_string());
        }

        if config.xml_feed {
            fragments.push(r"feed\.xml".to_string());
        }

        Self { fragments }
    }

    /// Check if no category is enabled (nothing to rewrite).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Individual fragments, in build order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Combined disjunctive source, e.g. `(?:/media/)|(?:feed\.xml)`.
    pub fn source(&self) -> String {
        self.fragments
            .iter()
            .map(|f| format!("(?:{f})"))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Compile the combined matcher. `Ok(None)` when the set is empty.
    pub fn matcher(&self) -> Result<Option<Regex>, regex::Error> {
        if self.is_empty() {
            return Ok(None);
        }
        Regex::new(&self.source()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(f: impl FnOnce(&mut CdnConfig)) -> CdnConfig {
        let mut config = CdnConfig::disabled_all("cdn.example.com");
        f(&mut config);
        config
    }

    fn matcher(config: &CdnConfig) -> Regex {
        PatternSet::from_config(config).matcher().unwrap().unwrap()
    }

    #[test]
    fn test_empty_when_nothing_enabled() {
        let set = PatternSet::from_config(&config(|_| {}));
        assert!(set.is_empty());
        assert!(set.matcher().unwrap().is_none());
        assert_eq!(set.source(), "");
    }

    #[test]
    fn test_sitemap_toggle_adds_no_fragment() {
        let set = PatternSet::from_config(&config(|c| c.sitemap = true));
        assert!(set.is_empty());
    }

    #[test]
    fn test_images_fragment() {
        let set = PatternSet::from_config(&config(|c| c.images = true));
        assert_eq!(set.fragments(), ["/media/"]);

        let re = matcher(&config(|c| c.images = true));
        assert!(re.is_match("/media/posts/a.jpg"));
        assert!(re.is_match("https://site.example/media/a.jpg"));
        assert!(!re.is_match("/assets/media.css"));
    }

    #[test]
    fn test_extensions_share_one_fragment() {
        let set = PatternSet::from_config(&config(|c| {
            c.css = true;
            c.js = true;
            c.fonts = true;
        }));
        assert_eq!(set.fragments().len(), 1);
        assert!(set.fragments()[0].contains("css|js|woff|woff2|ttf|otf|eot|svg"));
    }

    #[test]
    fn test_fonts_without_css() {
        let re = matcher(&config(|c| c.fonts = true));
        assert!(re.is_match("/themes/default/fonts/inter.woff2"));
        assert!(re.is_match("/assets/icons.svg"));
        assert!(!re.is_match("/assets/site.css"));
    }

    #[test]
    fn test_asset_fragment_requires_directory() {
        let re = matcher(&config(|c| c.css = true));
        assert!(re.is_match("/assets/site.css"));
        assert!(re.is_match("https://a.com/themes/x/style.css"));
        assert!(!re.is_match("/static/site.css"));
    }

    #[test]
    fn test_asset_fragment_allows_query_string() {
        let re = matcher(&config(|c| c.js = true));
        assert!(re.is_match("/assets/app.js?v=123"));
        assert!(re.is_match("/assets/app.js"));
        assert!(!re.is_match("/assets/app.json"));
        assert!(!re.is_match("/assets/app.js.map"));
    }

    #[test]
    fn test_feed_fragments() {
        let re = matcher(&config(|c| c.json_feed = true));
        assert!(re.is_match("/feed.json"));
        assert!(!re.is_match("/feed.xml"));
        assert!(!re.is_match("/feedXjson"));

        let re = matcher(&config(|c| c.xml_feed = true));
        assert!(re.is_match("https://site.example/feed.xml"));
    }

    #[test]
    fn test_fragment_order() {
        let set = PatternSet::from_config(&CdnConfig {
            json_feed: true,
            xml_feed: true,
            ..CdnConfig::default()
        });
        let fragments = set.fragments();
        assert_eq!(fragments.len(), 4);
        assert_eq!(fragments[0], "/media/");
        assert_eq!(fragments[2], r"feed\.json");
        assert_eq!(fragments[3], r"feed\.xml");
    }
}
