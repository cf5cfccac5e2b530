//! Document title and meta tags.

use super::target::RenderTarget;
use crate::config::Landing;

/// Title falls back to the business name when SEO gives none. Meta tags are
/// only written for present values so template defaults survive.
pub(super) fn apply<T: RenderTarget>(target: &mut T, config: &Landing) {
    let business_name = config.business_name.as_deref().unwrap_or_default();

    let Some(seo) = &config.seo else {
        target.set_title(business_name);
        return;
    };

    let title = seo
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(business_name);
    target.set_title(title);

    set_meta_opt(target, "description", &seo.description);
    set_meta_opt(target, "keywords", &seo.keywords);
    set_meta_opt(target, "og:title", &seo.title);
    set_meta_opt(target, "og:description", &seo.description);
    set_meta_opt(target, "og:image", &seo.og_image);
    set_meta_opt(target, "twitter:title", &seo.title);
    set_meta_opt(target, "twitter:description", &seo.description);
    set_meta_opt(target, "twitter:image", &seo.og_image);
}

fn set_meta_opt<T: RenderTarget>(target: &mut T, key: &str, content: &Option<String>) {
    if let Some(content) = content.as_deref().filter(|c| !c.is_empty()) {
        target.set_meta(key, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::populate::testing::RecordingTarget;

    #[test]
    fn test_title_falls_back_to_business_name() {
        let config = test_parse_config(r#"{ "businessName": "Acme Studio" }"#);
        let mut target = RecordingTarget::default();
        apply(&mut target, &config);

        assert_eq!(target.title.as_deref(), Some("Acme Studio"));
        assert!(target.metas.is_empty());
    }

    #[test]
    fn test_seo_title_wins_over_business_name() {
        let config = test_parse_config(
            r#"{
                "businessName": "Acme Studio",
                "seo": { "title": "Acme | Web Design" }
            }"#,
        );
        let mut target = RecordingTarget::default();
        apply(&mut target, &config);

        assert_eq!(target.title.as_deref(), Some("Acme | Web Design"));
        assert_eq!(target.meta("og:title"), Some("Acme | Web Design"));
        assert_eq!(target.meta("twitter:title"), Some("Acme | Web Design"));
    }

    #[test]
    fn test_absent_seo_values_write_no_meta() {
        let config = test_parse_config(
            r#"{
                "businessName": "Acme",
                "seo": { "description": "Handmade sites" }
            }"#,
        );
        let mut target = RecordingTarget::default();
        apply(&mut target, &config);

        assert_eq!(target.meta("description"), Some("Handmade sites"));
        assert_eq!(target.meta("og:description"), Some("Handmade sites"));
        assert_eq!(target.meta("keywords"), None);
        assert_eq!(target.meta("og:image"), None);
    }
}
