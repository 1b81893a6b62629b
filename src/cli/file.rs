//! Single document rewriting (`cdnify rewrite`).

use std::borrow::Cow;
use std::fs;
use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::common::render_context;
use crate::config::CdnifyConfig;
use crate::core::{HookPoint, Mode};
use crate::{debug, log, rewrite};

/// Rewrite one document, writing to `output` or stdout.
///
/// The hook is chosen from `name` when given, otherwise from the input file
/// name, so `page.tmp` can still be treated as `index.html`.
pub fn rewrite_file(
    config: &CdnifyConfig,
    input: &Path,
    output: Option<&Path>,
    name: Option<&str>,
    mode: Mode,
) -> Result<()> {
    let file_name = match name {
        Some(name) => name.to_string(),
        None => input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("not a file: {}", input.display()))?,
    };
    let Some(hook) = HookPoint::from_file_name(&file_name) else {
        bail!(
            "cannot tell document kind of `{}` (expected .html, .htm, .xml or .json)",
            file_name
        );
    };

    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let ctx = render_context(config, mode, &file_name);
    let registry = rewrite::registry(config.cdn.clone());
    let rewritten = registry.apply(hook, &ctx, &content);

    match &rewritten {
        Cow::Owned(_) => log!("rewrite"; "{} ({})", file_name, hook.name()),
        Cow::Borrowed(_) => debug!("rewrite"; "{} unchanged", file_name),
    }

    match output {
        Some(path) => fs::write(path, rewritten.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut out = stdout().lock();
            out.write_all(rewritten.as_bytes())
                .context("failed to write to stdout")?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn config() -> CdnifyConfig {
        test_parse_config(
            r#"[site]
url = "https://site.example"

[cdn]
url = "cdn.example.com"
json_feed = true"#,
        )
    }

    #[test]
    fn test_rewrite_html_to_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("index.html");
        let output = dir.path().join("out.html");
        fs::write(&input, r#"<img src="/media/a.jpg">"#).unwrap();

        rewrite_file(&config(), &input, Some(&output), None, Mode::Deploy).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            r#"<img src="http://cdn.example.com/media/a.jpg">"#
        );
        // input is never modified
        assert_eq!(fs::read_to_string(&input).unwrap(), r#"<img src="/media/a.jpg">"#);
    }

    #[test]
    fn test_name_overrides_document_kind() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("render.tmp");
        let output = dir.path().join("feed.json");
        fs::write(&input, r#"{"image":"https://site.example/media/a.jpg"}"#).unwrap();

        rewrite_file(&config(), &input, Some(&output), Some("feed.json"), Mode::Deploy).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["image"], "https://cdn.example.com/media/a.jpg");
    }

    #[test]
    fn test_preview_copies_verbatim() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("index.html");
        let output = dir.path().join("out.html");
        let html = "<img src='/media/a.jpg'>\r\n";
        fs::write(&input, html).unwrap();

        rewrite_file(&config(), &input, Some(&output), None, Mode::Preview).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), html);
    }

    #[test]
    fn test_unknown_document_kind() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("style.css");
        fs::write(&input, "body{}").unwrap();

        let err = rewrite_file(&config(), &input, None, None, Mode::Deploy).unwrap_err();
        assert!(err.to_string().contains("style.css"));
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("index.html");
        let err = rewrite_file(&config(), &input, None, None, Mode::Deploy).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
