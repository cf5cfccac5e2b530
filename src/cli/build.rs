//! Production build: render pages and copy assets.

use crate::config::{Landing, ThemeMode};
use crate::dom::Document;
use crate::embed::css::STYLE_CSS;
use crate::embed::js::{RUNTIME_JS, RuntimeVars};
use crate::embed::page;
use crate::form::FALLBACK_DELAY;
use crate::populate::populate_page;
use crate::widgets::theme::{self, PrefsStore, SchemeHint};
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Render the landing page for a validated config.
pub fn render_index(config: &Landing, theme: ThemeMode) -> Result<String> {
    let mut doc =
        Document::parse(page::INDEX_HTML).context("embedded page template failed to parse")?;
    populate_page(&mut doc, config, theme);
    Ok(doc.render())
}

/// Effective theme for rendering: stored preference, OS hint, config default.
pub fn resolve_theme(config: &Landing) -> ThemeMode {
    let store = PrefsStore::new(&config.root);
    theme::resolve(&store, SchemeHint::from_env(), config.theme.default)
}

/// The browser runtime with the fallback delay baked in.
pub fn runtime_js() -> String {
    RUNTIME_JS.render(&RuntimeVars {
        fallback_delay_ms: FALLBACK_DELAY.as_millis() as u64,
    })
}

/// Render everything into the output directory.
pub fn build_site(config: &Landing, output: &Path) -> Result<()> {
    config.validate().map_err(|diag| anyhow::anyhow!("{diag}"))?;

    let output = config.root_join(output);
    fs::create_dir_all(&output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    let theme = resolve_theme(config);
    fs::write(output.join("index.html"), render_index(config, theme)?)?;
    fs::write(output.join("thankyou.html"), page::THANKYOU_HTML)?;
    fs::write(output.join("style.css"), STYLE_CSS)?;
    fs::write(output.join("runtime.js"), runtime_js())?;

    let copied = copy_assets(config, &output)?;
    debug!("build"; "copied {copied} asset file(s)");

    log!("build"; "rendered to {}", output.display());
    Ok(())
}

/// Copy everything under `assets/` into the output, preserving layout.
fn copy_assets(config: &Landing, output: &Path) -> Result<usize> {
    let assets = config.root_join("assets");
    if !assets.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in jwalk::WalkDir::new(&assets).sort(true) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let rel = path.strip_prefix(&assets)?;
        let dest = output.join("assets").join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&path, &dest)
            .with_context(|| format!("failed to copy {}", path.display()))?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_valid_config;
    use tempfile::tempdir;

    fn project_with_config(json: &str) -> (tempfile::TempDir, Landing) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("landing.json");
        fs::write(&path, json).unwrap();
        let config = Landing::load(&path).unwrap();
        (dir, config)
    }

    #[test]
    fn test_render_index_populates_hooks() {
        let config = test_valid_config();
        let html = render_index(&config, ThemeMode::Dark).unwrap();

        assert!(html.contains("data-theme=\"dark\""));
        assert!(html.contains("Acme Studio"));
        assert!(html.contains("https://wa.me/15551234567"));
    }

    #[test]
    fn test_build_writes_site_files() {
        let (_dir, config) = project_with_config(
            r#"{
                "businessName": "Acme Studio",
                "formAction": "/lead",
                "formFields": { "name": "entry.1", "email": "entry.2" },
                "whatsapp": "15551234567"
            }"#,
        );

        build_site(&config, Path::new("dist")).unwrap();

        let dist = config.root_join("dist");
        for file in ["index.html", "thankyou.html", "style.css", "runtime.js"] {
            assert!(dist.join(file).is_file(), "missing {file}");
        }
        let js = fs::read_to_string(dist.join("runtime.js")).unwrap();
        assert!(js.contains("3000"));
    }

    #[test]
    fn test_build_rejects_invalid_config_listing_all_keys() {
        let (_dir, config) = project_with_config("{}");

        let err = build_site(&config, Path::new("dist")).unwrap_err();
        let message = format!("{err}");
        for field in ["businessName", "formAction", "whatsapp", "formFields"] {
            assert!(message.contains(field), "missing {field} in error");
        }
    }

    #[test]
    fn test_assets_copied_recursively() {
        let (_dir, config) = project_with_config(
            r#"{
                "businessName": "Acme",
                "formAction": "/lead",
                "formFields": { "name": "entry.1", "email": "entry.2" },
                "whatsapp": "1555"
            }"#,
        );
        let icons = config.root_join("assets/icons");
        fs::create_dir_all(&icons).unwrap();
        fs::write(config.root_join("assets/hero.svg"), "<svg/>").unwrap();
        fs::write(icons.join("design.svg"), "<svg/>").unwrap();

        build_site(&config, Path::new("dist")).unwrap();

        assert!(config.root_join("dist/assets/hero.svg").is_file());
        assert!(config.root_join("dist/assets/icons/design.svg").is_file());
    }
}
