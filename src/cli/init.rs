//! Project scaffolding.

use crate::log;
use anyhow::{Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

const STARTER_CONFIG: &str = r##"{
  "businessName": "Acme Studio",
  "tagline": "Small sites, big results",
  "email": "hello@acme.example",
  "whatsapp": "15551234567",
  "heroHeadline": "Grow your business online",
  "heroSubheadline": "A fast, focused landing page that turns visitors into leads.",
  "heroCTA": "Get a free quote",
  "heroImage": "assets/hero.svg",
  "formAction": "/lead",
  "formFields": {
    "name": "entry.1000001",
    "email": "entry.1000002",
    "phone": "entry.1000003",
    "message": "entry.1000004"
  },
  "services": [
    {
      "icon": "assets/icon-design.svg",
      "title": "Design",
      "description": "Clean, conversion-first layouts."
    },
    {
      "icon": "assets/icon-build.svg",
      "title": "Build",
      "description": "Fast pages with no framework overhead."
    }
  ],
  "social": {
    "linkedin": "https://linkedin.com/company/acme",
    "twitter": "https://twitter.com/acme"
  },
  "colors": {
    "primary": "#4f6df5",
    "accent": "#f5a54f"
  },
  "seo": {
    "title": "Acme Studio | Landing pages that convert",
    "description": "We design and build landing pages for small businesses."
  },
  "theme": { "default": "dark" }
}
"##;

const STARTER_HERO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 280">
  <rect width="400" height="280" rx="16" fill="#1a2030"/>
  <circle cx="120" cy="120" r="56" fill="#4f6df5"/>
  <rect x="210" y="80" width="140" height="16" rx="8" fill="#9aa3b5"/>
  <rect x="210" y="112" width="110" height="16" rx="8" fill="#5a6478"/>
  <rect x="210" y="160" width="90" height="28" rx="14" fill="#f5a54f"/>
</svg>
"##;

const STARTER_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 48">
  <rect width="48" height="48" rx="10" fill="#4f6df5"/>
  <path d="M14 25l7 7 13-15" stroke="#fff" stroke-width="4" fill="none" stroke-linecap="round"/>
</svg>
"##;

/// Scaffold a starter project: config plus placeholder assets.
pub fn new_project(name: Option<&Path>) -> Result<()> {
    let dir = name.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    let config_path = dir.join("landing.json");
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::create_dir_all(dir.join("assets"))?;
    fs::write(&config_path, STARTER_CONFIG)?;
    fs::write(dir.join("assets/hero.svg"), STARTER_HERO)?;
    fs::write(dir.join("assets/icon-design.svg"), STARTER_ICON)?;
    fs::write(dir.join("assets/icon-build.svg"), STARTER_ICON)?;

    log!("init"; "created {}", config_path.display());
    log!("init"; "edit landing.json, then run `lander serve`");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::tempdir;

    #[test]
    fn test_starter_config_is_valid() {
        let config = test_parse_config(STARTER_CONFIG);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scaffold_creates_project() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("mysite");

        new_project(Some(&root)).unwrap();

        assert!(root.join("landing.json").is_file());
        assert!(root.join("assets/hero.svg").is_file());
        assert!(root.join("assets/icon-design.svg").is_file());
    }

    #[test]
    fn test_scaffold_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        new_project(Some(dir.path())).unwrap();
        assert!(new_project(Some(dir.path())).is_err());
    }
}
