//! Batch rewriting of a built site (`cdnify site`).
//!
//! Walks the output directory, runs every hookable document through the
//! registry in parallel and writes back only documents that changed.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;

use super::common::{plural_count, relative_name, render_context};
use crate::config::CdnifyConfig;
use crate::core::{HookPoint, HookRegistry, Mode};
use crate::logger::ProgressLine;
use crate::{debug, log, rewrite};

/// Outcome of a site run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteSummary {
    /// Hookable documents found.
    pub documents: usize,
    /// Documents whose content changed.
    pub changed: usize,
}

/// Rewrite every document under `dir` in place.
pub fn rewrite_site(config: &CdnifyConfig, dir: &Path, mode: Mode, dry: bool) -> Result<SiteSummary> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }
    if config.cdn.domain().is_none() {
        log!("site"; "no CDN URL configured, nothing to rewrite");
        return Ok(SiteSummary::default());
    }

    let documents = collect_documents(dir);
    if documents.is_empty() {
        log!("site"; "no documents found in {}", dir.display());
        return Ok(SiteSummary::default());
    }

    log!("site"; "rewriting {} in {} mode", plural_count(documents.len(), "document"), mode);

    let registry = rewrite::registry(config.cdn.clone());
    let counts: Vec<_> = HookPoint::ALL
        .iter()
        .map(|&hook| (hook.name(), documents.iter().filter(|(_, h)| *h == hook).count()))
        .collect();
    let progress = ProgressLine::new(&counts);
    let changed = AtomicUsize::new(0);

    documents.par_iter().try_for_each(|(path, hook)| {
        let name = relative_name(dir, path);
        if rewrite_document(config, &registry, path, &name, *hook, mode, dry)? {
            changed.fetch_add(1, Ordering::Relaxed);
        }
        progress.inc(hook.name());
        Ok::<_, anyhow::Error>(())
    })?;
    progress.finish();

    let summary = SiteSummary {
        documents: documents.len(),
        changed: changed.into_inner(),
    };
    let verb = if dry { "would rewrite" } else { "rewrote" };
    log!("done"; "{} {} of {}", verb, summary.changed, plural_count(summary.documents, "document"));
    Ok(summary)
}

/// Hookable files under `dir`, sorted by path.
fn collect_documents(dir: &Path) -> Vec<(PathBuf, HookPoint)> {
    let mut documents: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            HookPoint::from_path(&path).map(|hook| (path, hook))
        })
        .collect();
    documents.sort_by(|a, b| a.0.cmp(&b.0));
    documents
}

/// Rewrite one document, returning whether its content changed.
fn rewrite_document(
    config: &CdnifyConfig,
    registry: &HookRegistry,
    path: &Path,
    name: &str,
    hook: HookPoint,
    mode: Mode,
    dry: bool,
) -> Result<bool> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ctx = render_context(config, mode, name);
    let Cow::Owned(rewritten) = registry.apply(hook, &ctx, &content) else {
        return Ok(false);
    };
    if rewritten == content {
        return Ok(false);
    }

    if dry {
        debug!("site"; "would rewrite {}", name);
    } else {
        fs::write(path, rewritten).with_context(|| format!("failed to write {}", path.display()))?;
        debug!("site"; "rewrote {}", name);
    }
    Ok(true)
}
