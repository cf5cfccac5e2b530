//! Landing page configuration (`landing.json`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── schema/        # Typed sections (formFields, colors, seo, ...)
//! ├── types/         # Utility types
//! │   ├── error      # LoadError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle (arc-swap)
//! └── mod.rs         # Landing (this file)
//! ```
//!
//! Loading and validation are separate steps with separate failure modes:
//! `load` fails on IO/parse problems (`LoadError`), `validate` collects every
//! missing required key into one `ConfigDiagnostics` report. Required fields
//! are `Option` at the serde layer precisely so that the validator, not the
//! deserializer, owns missing-key reporting.

pub mod schema;
pub mod types;

pub use schema::{Colors, FormFields, Seo, Service, ThemeConfig, ThemeMode};
pub use types::{ConfigDiagnostics, FieldPath, LoadError, cfg, init_config, reload_config};

use crate::log;
use schema::present;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const BUSINESS_NAME: FieldPath = FieldPath::new("businessName");
const FORM_ACTION: FieldPath = FieldPath::new("formAction");
const FORM_FIELDS: FieldPath = FieldPath::new("formFields");
const WHATSAPP: FieldPath = FieldPath::new("whatsapp");

/// Root configuration structure representing landing.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Landing {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    // --- required (presence enforced by validate(), not serde) ---
    pub business_name: Option<String>,
    /// Lead form POST target. Relative actions are handled by the dev server;
    /// absolute URLs point at an external endpoint.
    pub form_action: Option<String>,
    pub form_fields: Option<FormFields>,
    /// WhatsApp number for the `https://wa.me/<number>` deep link.
    pub whatsapp: Option<String>,

    // --- optional content ---
    pub email: Option<String>,
    pub tagline: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_subheadline: Option<String>,
    #[serde(rename = "heroCTA")]
    pub hero_cta: Option<String>,
    pub hero_image: Option<String>,
    pub colors: Option<Colors>,
    pub seo: Option<Seo>,
    pub services: Vec<Service>,
    /// Platform name → profile URL. Unknown platforms are skipped at render.
    pub social: Option<serde_json::Map<String, serde_json::Value>>,
    pub theme: ThemeConfig,
}

impl Landing {
    /// Load configuration from a file path with unknown field detection.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content =
            fs::read_to_string(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse JSON content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), LoadError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate required keys, collecting every missing one.
    ///
    /// Top level: businessName, formAction, formFields, whatsapp.
    /// Nested: formFields.name, formFields.email. Empty strings count as
    /// missing. Never stops at the first error.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();

        if !present(&self.business_name) {
            diag.missing(BUSINESS_NAME);
        }
        if !present(&self.form_action) {
            diag.missing(FORM_ACTION);
        }
        if !present(&self.whatsapp) {
            diag.missing(WHATSAPP);
        }
        match &self.form_fields {
            None => diag.missing(FORM_FIELDS),
            Some(fields) => fields.validate(&mut diag),
        }

        diag.into_result()
    }

    /// Join a path with the project root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// The WhatsApp deep link for the configured number, if any.
    pub fn whatsapp_link(&self) -> Option<String> {
        self.whatsapp
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| format!("https://wa.me/{n}"))
    }

    /// Whether the form action is handled by the dev server (relative path)
    /// rather than an external endpoint.
    pub fn form_action_is_local(&self) -> bool {
        match self.form_action.as_deref() {
            Some(action) => !action.contains("://"),
            None => false,
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config from a JSON literal, panicking on unknown fields
/// (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(json: &str) -> Landing {
    let (parsed, ignored) = Landing::parse_with_ignored(json).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A minimal valid configuration for tests.
#[cfg(test)]
pub fn test_valid_config() -> Landing {
    test_parse_config(
        r#"{
            "businessName": "Acme Studio",
            "formAction": "/lead",
            "formFields": { "name": "entry.1", "email": "entry.2" },
            "whatsapp": "15551234567"
        }"#,
    )
}

// ============================================================================
// tests
// ============================================================================
