//! Brand color overrides.

use serde::{Deserialize, Serialize};

/// Optional brand palette. Each entry maps to a CSS custom property on the
/// document root; absent entries leave the stylesheet defaults untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Colors {
    pub primary: Option<String>,
    pub primary_dark: Option<String>,
    pub accent: Option<String>,
    pub accent_dark: Option<String>,
    pub text: Option<String>,
    pub text_light: Option<String>,
    pub background: Option<String>,
    pub background_light: Option<String>,
}

impl Colors {
    /// CSS custom property name / value pairs, in stylesheet order.
    pub fn css_vars(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("--color-primary", &self.primary),
            ("--color-primary-dark", &self.primary_dark),
            ("--color-accent", &self.accent),
            ("--color-accent-dark", &self.accent_dark),
            ("--color-text", &self.text),
            ("--color-text-light", &self.text_light),
            ("--color-background", &self.background),
            ("--color-background-light", &self.background_light),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect::<Vec<_>>()
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_present_vars_emitted() {
        let colors = Colors {
            primary: Some("#0a84ff".into()),
            background: Some("#101418".into()),
            ..Default::default()
        };
        let vars: Vec<_> = colors.css_vars().collect();

        assert_eq!(
            vars,
            vec![
                ("--color-primary", "#0a84ff"),
                ("--color-background", "#101418"),
            ]
        );
    }

    #[test]
    fn test_empty_palette_emits_nothing() {
        assert_eq!(Colors::default().css_vars().count(), 0);
    }
}
