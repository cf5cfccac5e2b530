//! Typed sections of the landing configuration.

mod colors;
mod form;
mod seo;
mod service;
pub mod social;
mod theme;

pub use colors::Colors;
pub use form::FormFields;
pub use seo::Seo;
pub use service::Service;
pub use theme::{ThemeConfig, ThemeMode};

/// JS-falsy presence check: a required string field set to `""` is treated
/// the same as an absent one.
pub(crate) fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
