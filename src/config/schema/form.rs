//! Lead form field bindings.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const NAME: FieldPath = FieldPath::new("formFields.name");
const EMAIL: FieldPath = FieldPath::new("formFields.email");

/// Maps the visible form inputs to the external endpoint's parameter names
/// (e.g. Google Form `entry.NNN` ids). `name` and `email` are required;
/// `phone` and `message` are bound only when mapped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl FormFields {
    /// Collect missing required bindings. Empty strings count as missing.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !super::present(&self.name) {
            diag.missing(NAME);
        }
        if !super::present(&self.email) {
            diag.missing(EMAIL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_required_fields_reported() {
        let fields = FormFields::default();
        let mut diag = ConfigDiagnostics::new();
        fields.validate(&mut diag);

        assert_eq!(diag.fields(), vec!["formFields.name", "formFields.email"]);
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let fields = FormFields {
            name: Some(String::new()),
            email: Some("entry.2".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        fields.validate(&mut diag);

        assert_eq!(diag.fields(), vec!["formFields.name"]);
    }

    #[test]
    fn test_optional_fields_not_required() {
        let fields = FormFields {
            name: Some("entry.1".into()),
            email: Some("entry.2".into()),
            phone: None,
            message: None,
        };
        let mut diag = ConfigDiagnostics::new();
        fields.validate(&mut diag);

        assert!(diag.is_empty());
    }
}
