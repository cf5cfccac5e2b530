//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `page` - Landing page and thank-you page markup
//! - `js` - Browser runtime script (nav, theme, form fallback)
//! - `css` - Default stylesheet
//!
//! # Usage
//!
//! ```ignore
//! use embed::js::{RUNTIME_JS, RuntimeVars};
//! use embed::page::INDEX_HTML;
//!
//! let js = RUNTIME_JS.render(&RuntimeVars { fallback_delay_ms: 3000 });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod page {
    /// Landing page template, populated per config at render time.
    pub const INDEX_HTML: &str = include_str!("page/index.html");

    /// Post-submission page.
    pub const THANKYOU_HTML: &str = include_str!("page/thankyou.html");
}

pub mod js {
    use super::{Template, TemplateVars};

    /// Variables for runtime.js.
    pub struct RuntimeVars {
        pub fallback_delay_ms: u64,
    }

    impl TemplateVars for RuntimeVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__FALLBACK_DELAY_MS__", &self.fallback_delay_ms.to_string())
        }
    }

    /// Browser runtime: navigation, theme toggle, optimistic form submit
    /// with the fallback modal timer.
    pub const RUNTIME_JS: Template<RuntimeVars> =
        Template::new(include_str!("js/runtime.js"));
}

pub mod css {
    /// Default stylesheet. Brand colors come in through the `--color-*`
    /// custom properties the populator sets on the root element.
    pub const STYLE_CSS: &str = include_str!("css/style.css");
}
