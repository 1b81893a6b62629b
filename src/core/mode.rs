//! Render mode reported by the host for the current pass.

use serde::{Deserialize, Serialize};

/// Render mode of the current pass.
///
/// Only [`Mode::Deploy`] produces CDN URLs. Both preview modes serve from the
/// local origin, so every rewriter passes their output through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Output generated for publication.
    #[default]
    Deploy,
    /// Full preview build served locally.
    Preview,
    /// Incremental live preview of a single page.
    InstantPreview,
}

impl Mode {
    /// Check if this pass generates output for publication.
    #[inline]
    pub const fn is_deploy(self) -> bool {
        matches!(self, Self::Deploy)
    }

    /// Display name, matching the config/CLI spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deploy => "deploy",
            Self::Preview => "preview",
            Self::InstantPreview => "instant-preview",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
