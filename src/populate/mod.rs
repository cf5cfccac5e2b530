//! Page population: configuration values into the landing template.
//!
//! # Module Structure
//!
//! ```text
//! populate/
//! ├── target      # RenderTarget trait + Document impl
//! ├── meta        # Title and meta tags
//! ├── services    # Service card grid
//! ├── social      # Footer social links
//! ├── form        # Lead form wiring
//! └── mod.rs      # populate_page orchestration (this file)
//! ```

mod form;
mod meta;
mod services;
mod social;
pub mod target;

pub use target::RenderTarget;

use crate::config::{Landing, ThemeMode};
use std::time::{SystemTime, UNIX_EPOCH};

/// Apply a validated configuration to a render target.
///
/// Missing optional values leave the corresponding template content in
/// place; missing element ids are silently skipped.
pub fn populate_page<T: RenderTarget>(target: &mut T, config: &Landing, theme: ThemeMode) {
    target.set_root_attr("data-theme", theme.as_str());

    if let Some(colors) = &config.colors {
        for (name, value) in colors.css_vars() {
            target.set_css_var(name, value);
        }
    }

    meta::apply(target, config);

    // Hero
    set_text_opt(target, "heroTitle", &config.hero_headline);
    set_text_opt(target, "heroSubtitle", &config.hero_subheadline);
    set_text_opt(target, "heroCTA", &config.hero_cta);
    if let Some(src) = nonempty(&config.hero_image) {
        target.set_image("heroImage", src, Some("Hero image"));
    }

    // Navigation mirrors the hero call to action
    set_text_opt(target, "navBrand", &config.business_name);
    set_text_opt(target, "navCTA", &config.hero_cta);

    services::apply(target, &config.services);

    // Contact
    set_text_opt(target, "contactEmail", &config.email);
    if let Some(link) = config.whatsapp_link() {
        target.set_link("contactWhatsApp", &link, Some("WhatsApp"));
        target.set_link("modalWhatsApp", &link, Some("Message on WhatsApp"));
    }

    // Footer
    set_text_opt(target, "footerTagline", &config.tagline);
    set_text_opt(target, "footerBusiness", &config.business_name);
    target.set_text("currentYear", &current_utc_year().to_string());

    if let Some(social) = &config.social {
        social::apply(target, social);
    }

    form::apply(target, config);
}

fn set_text_opt<T: RenderTarget>(target: &mut T, id: &str, value: &Option<String>) {
    if let Some(text) = nonempty(value) {
        target.set_text(id, text);
    }
}

fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Year of the current UTC date, for the footer copyright line.
fn current_utc_year() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_of_unix_secs(secs)
}

/// Gregorian year from a unix timestamp, using March-based eras so leap days
/// fall at the end of the internal year.
fn year_of_unix_secs(secs: u64) -> i64 {
    let days = (secs / 86_400) as i64;
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let month_index = (5 * doy + 2) / 153;
    let year = yoe + era * 400;
    // January and February belong to the next civil year
    if month_index >= 10 { year + 1 } else { year }
}

// ============================================================================
// Test Helpers
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::target::RenderTarget;
    use crate::dom::Node;

    /// Records population calls for assertion without an HTML tree.
    #[derive(Debug, Default)]
    pub struct RecordingTarget {
        pub texts: Vec<(String, String)>,
        pub images: Vec<(String, String, Option<String>)>,
        pub links: Vec<(String, String, Option<String>)>,
        pub attrs: Vec<(String, String, String)>,
        pub title: Option<String>,
        pub metas: Vec<(String, String)>,
        pub css_vars: Vec<(String, String)>,
        pub root_attrs: Vec<(String, String)>,
        pub ensured_inputs: Vec<(String, String)>,
        pub rebuilds: Vec<(String, Vec<Node>)>,
    }

    impl RecordingTarget {
        pub fn text(&self, id: &str) -> Option<&str> {
            self.texts
                .iter()
                .rev()
                .find(|(i, _)| i == id)
                .map(|(_, t)| t.as_str())
        }

        pub fn link(&self, id: &str) -> Option<(&str, Option<&str>)> {
            self.links
                .iter()
                .rev()
                .find(|(i, _, _)| i == id)
                .map(|(_, href, text)| (href.as_str(), text.as_deref()))
        }

        pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
            self.attrs
                .iter()
                .rev()
                .find(|(i, n, _)| i == id && n == name)
                .map(|(_, _, v)| v.as_str())
        }

        pub fn meta(&self, key: &str) -> Option<&str> {
            self.metas
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }

        pub fn root_attr(&self, name: &str) -> Option<&str> {
            self.root_attrs
                .iter()
                .rev()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        }
    }

    impl RenderTarget for RecordingTarget {
        fn set_text(&mut self, id: &str, text: &str) {
            self.texts.push((id.into(), text.into()));
        }

        fn set_image(&mut self, id: &str, src: &str, alt: Option<&str>) {
            self.images
                .push((id.into(), src.into(), alt.map(Into::into)));
        }

        fn set_link(&mut self, id: &str, href: &str, text: Option<&str>) {
            self.links
                .push((id.into(), href.into(), text.map(Into::into)));
        }

        fn set_value(&mut self, id: &str, value: &str) {
            self.set_attr(id, "value", value);
        }

        fn set_attr(&mut self, id: &str, name: &str, value: &str) {
            self.attrs.push((id.into(), name.into(), value.into()));
        }

        fn set_title(&mut self, title: &str) {
            self.title = Some(title.into());
        }

        fn set_meta(&mut self, key: &str, content: &str) {
            self.metas.push((key.into(), content.into()));
        }

        fn set_css_var(&mut self, name: &str, value: &str) {
            self.css_vars.push((name.into(), value.into()));
        }

        fn set_root_attr(&mut self, name: &str, value: &str) {
            self.root_attrs.push((name.into(), value.into()));
        }

        fn ensure_hidden_input(&mut self, form_id: &str, id: &str) {
            self.ensured_inputs.push((form_id.into(), id.into()));
        }

        fn rebuild(&mut self, id: &str, children: Vec<Node>) {
            self.rebuilds.push((id.into(), children));
        }
    }
}

// ============================================================================
// tests
// ============================================================================
