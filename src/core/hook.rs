//! Named output hooks and the registry that chains rewriters onto them.
//!
//! The host invokes one hook per generated document:
//!
//! | Hook       | Documents                      |
//! |------------|--------------------------------|
//! | `Html`     | rendered pages                 |
//! | `Rss`      | RSS/Atom XML feeds             |
//! | `JsonFeed` | JSON feeds                     |
//! | `Sitemap`  | `sitemap.xml`                  |

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use super::{Priority, RenderContext};
use crate::debug;

/// A text-to-text transform attached to a hook.
///
/// Returning `Cow::Borrowed` signals "unchanged". Implementations must be
/// pure over their inputs so the host can run documents in parallel.
pub trait DocumentRewriter: Send + Sync {
    fn rewrite<'a>(&self, ctx: &RenderContext, text: &'a str) -> Cow<'a, str>;
}

impl<F> DocumentRewriter for F
where
    F: for<'a> Fn(&RenderContext, &'a str) -> Cow<'a, str> + Send + Sync,
{
    fn rewrite<'a>(&self, ctx: &RenderContext, text: &'a str) -> Cow<'a, str> {
        self(ctx, text)
    }
}

/// Output hook points exposed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    Html,
    Rss,
    JsonFeed,
    Sitemap,
}

impl HookPoint {
    pub const ALL: [Self; 4] = [Self::Html, Self::Rss, Self::JsonFeed, Self::Sitemap];

    /// Detect the hook for an output file name.
    ///
    /// `sitemap.xml` wins over the generic `.xml` feed rule.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".html") || lower.ends_with(".htm") {
            Some(Self::Html)
        } else if lower.ends_with("sitemap.xml") {
            Some(Self::Sitemap)
        } else if lower.ends_with(".xml") {
            Some(Self::Rss)
        } else if lower.ends_with(".json") {
            Some(Self::JsonFeed)
        } else {
            None
        }
    }

    /// Detect the hook for an output file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(Self::from_file_name)
    }

    /// Display name for this hook.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Rss => "rss",
            Self::JsonFeed => "json-feed",
            Self::Sitemap => "sitemap",
        }
    }
}

struct Registration {
    hook: HookPoint,
    priority: Priority,
    name: &'static str,
    rewriter: Arc<dyn DocumentRewriter>,
}

/// Rewriters registered against hook points.
///
/// Immutable once built; share it across threads behind `&` or `Arc`.
#[derive(Default)]
pub struct HookRegistry {
    entries: Vec<Registration>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rewriter to a hook.
    pub fn register(
        &mut self,
        hook: HookPoint,
        priority: Priority,
        name: &'static str,
        rewriter: Arc<dyn DocumentRewriter>,
    ) {
        // Stable insert keeps registration order among equal priorities
        let idx = self
            .entries
            .partition_point(|entry| entry.priority <= priority);
        self.entries.insert(
            idx,
            Registration {
                hook,
                priority,
                name,
                rewriter,
            },
        );
    }

    /// Run every rewriter attached to `hook`, in priority order.
    pub fn apply<'a>(&self, hook: HookPoint, ctx: &RenderContext, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for entry in self.entries.iter().filter(|e| e.hook == hook) {
            let rewritten = match entry.rewriter.rewrite(ctx, &current) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(s) = rewritten {
                debug!("hook"; "{} rewrote {}", entry.name, ctx.file_name);
                current = Cow::Owned(s);
            }
        }
        current
    }

    /// Names of rewriters attached to `hook`, in execution order.
    pub fn names(&self, hook: HookPoint) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.hook == hook)
            .map(|e| e.name)
            .collect()
    }

    /// Check if any rewriter is attached to `hook`.
    pub fn has(&self, hook: HookPoint) -> bool {
        self.entries.iter().any(|e| e.hook == hook)
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.entries
                    .iter()
                    .map(|e| (e.hook, e.priority, e.name)),
            )
            .finish()
    }
}
