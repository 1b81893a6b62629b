//! CDN rewriting for HTML documents.
//!
//! Works on the raw markup with a single attribute scanner instead of a DOM:
//! only quoted `src`, `href` and `srcset` values are touched, everything else
//! is copied byte-for-byte. Values with a quote character inside, or written
//! without quotes, are left alone.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use super::PatternSet;
use crate::config::CdnConfig;
use crate::core::url::{protocol_of, url_path};
use crate::core::{DocumentRewriter, RenderContext};
use crate::debug;

/// `src="…"`, `href='…'`, `srcset="…"`; group 1 = name, 2/3 = value.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?-u:\b)(srcset|src|href)=(?:"([^"']*)"|'([^"']*)')"#).unwrap()
});

/// Rewrites asset URLs in HTML attributes to the CDN domain.
#[derive(Debug, Clone)]
pub struct HtmlRewriter {
    config: Arc<CdnConfig>,
}

impl HtmlRewriter {
    pub fn new(config: Arc<CdnConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CdnConfig {
        &self.config
    }
}

impl DocumentRewriter for HtmlRewriter {
    fn rewrite<'a>(&self, ctx: &RenderContext, html: &'a str) -> Cow<'a, str> {
        if !ctx.mode.is_deploy() {
            return Cow::Borrowed(html);
        }
        let Some(domain) = self.config.domain() else {
            return Cow::Borrowed(html);
        };

        let matcher = match PatternSet::from_config(&self.config).matcher() {
            Ok(Some(matcher)) => matcher,
            Ok(None) => {
                debug!("html"; "no asset category enabled, skipping {}", ctx.file_name);
                return Cow::Borrowed(html);
            }
            Err(e) => {
                debug!("html"; "invalid asset pattern, skipping {}: {}", ctx.file_name, e);
                return Cow::Borrowed(html);
            }
        };

        let rewriter = UrlRewriter {
            matcher: &matcher,
            domain,
        };
        let mut changed = false;
        let output = ATTRIBUTE.replace_all(html, |caps: &Captures| {
            match rewriter.rewrite_attribute(caps) {
                Some(attribute) => {
                    changed = true;
                    attribute
                }
                None => caps[0].to_string(),
            }
        });

        if changed {
            Cow::Owned(output.into_owned())
        } else {
            Cow::Borrowed(html)
        }
    }
}

/// Per-document URL rewriting state.
struct UrlRewriter<'r> {
    matcher: &'r Regex,
    domain: &'r str,
}

impl UrlRewriter<'_> {
    /// Rewritten `name="value"`, or `None` when nothing in the value changed.
    fn rewrite_attribute(&self, caps: &Captures) -> Option<String> {
        let name = &caps[1];
        let value = caps.get(2).or_else(|| caps.get(3))?.as_str();

        let rewritten = if name == "srcset" {
            self.rewrite_srcset(value)?
        } else {
            self.rewrite_url(value)?
        };

        Some(format!("{name}=\"{rewritten}\""))
    }

    /// Rewrite each candidate URL in a `srcset`, keeping its descriptors.
    ///
    /// `a.jpg 1x,b.jpg  2x` -> `cdn/a.jpg 1x, cdn/b.jpg 2x`
    fn rewrite_srcset(&self, value: &str) -> Option<String> {
        let mut changed = false;
        let entries: Vec<String> = value
            .split(',')
            .map(|entry| {
                let mut tokens = entry.split_whitespace();
                // Empty candidates (`a.jpg,,b.jpg`, trailing comma) are kept
                let Some(url) = tokens.next() else {
                    return String::new();
                };
                let url = match self.rewrite_url(url) {
                    Some(rewritten) => {
                        changed = true;
                        Cow::Owned(rewritten)
                    }
                    None => Cow::Borrowed(url),
                };

                let descriptors: Vec<&str> = tokens.collect();
                if descriptors.is_empty() {
                    url.into_owned()
                } else {
                    format!("{} {}", url, descriptors.join(" "))
                }
            })
            .collect();

        changed.then(|| entries.join(", "))
    }

    /// Point a single URL at the CDN, or `None` to leave it as is.
    ///
    /// Only absolute `http(s)` and root-relative URLs that match an enabled
    /// category are rewritten. The scheme is kept for `https://` sources and
    /// falls back to `http://` for everything else.
    fn rewrite_url(&self, url: &str) -> Option<String> {
        if !(url.starts_with("http") || url.starts_with('/')) {
            return None;
        }
        if !self.matcher.is_match(url) {
            return None;
        }

        let path = url_path(url)?;
        Some(format!("{}{}{}", protocol_of(url), self.domain, path))
    }
}
