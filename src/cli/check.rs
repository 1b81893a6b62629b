//! Configuration report (`cdnify check`).

use anyhow::{Context, Result};

use crate::config::CdnifyConfig;
use crate::core::HookPoint;
use crate::log;
use crate::rewrite::{self, PatternSet};

/// Print diagnostics, the HTML match pattern and the hook registrations.
///
/// Diagnostics are warnings only; the command fails just when the match
/// pattern cannot be compiled.
pub fn check_config(config: &CdnifyConfig) -> Result<()> {
    match &config.config_path {
        Some(path) => log!("check"; "config: {}", path.display()),
        None => log!("check"; "config: defaults (no config file found)"),
    }

    let diagnostics = config.diagnose();
    diagnostics.print();

    let Some(domain) = config.cdn.domain() else {
        log!("check"; "no CDN URL set, every document passes through unchanged");
        return Ok(());
    };
    log!("check"; "cdn domain: {}", domain);

    let patterns = PatternSet::from_config(&config.cdn);
    patterns
        .matcher()
        .context("invalid asset match pattern")?;
    if patterns.is_empty() {
        log!("check"; "html pattern: none (no category enabled)");
    } else {
        log!("check"; "html pattern: {}", patterns.source());
    }

    let registry = rewrite::registry(config.cdn.clone());
    for hook in HookPoint::ALL {
        let names = registry.names(hook);
        log!("check"; "{:<9} -> {}", hook.name(), names.join(", "));
    }

    if diagnostics.is_empty() {
        log!("done"; "config ok");
    } else {
        log!("done"; "{} warning{}", diagnostics.len(), super::common::plural_s(diagnostics.len()));
    }
    Ok(())
}
