//! Footer social links.

use super::target::RenderTarget;
use crate::config::schema::social::renderable;
use crate::dom::{Element, Node, Text};
use serde_json::{Map, Value};

/// Icons are inlined as SVG markup so the footer costs no extra requests.
fn icon_markup(platform: &str) -> Option<&'static str> {
    match platform {
        "linkedin" => Some(
            r#"<svg viewBox="0 0 24 24"><path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"/></svg>"#,
        ),
        "twitter" => Some(
            r#"<svg viewBox="0 0 24 24"><path d="M23 3a10.9 10.9 0 01-3.14 1.53 4.48 4.48 0 00-7.86 3v1A10.66 10.66 0 013 4s-4 9 5 13a11.64 11.64 0 01-7 2c9 5 20 0 20-11.5a4.5 4.5 0 00-.08-.83A7.72 7.72 0 0023 3z"/></svg>"#,
        ),
        "facebook" => Some(
            r#"<svg viewBox="0 0 24 24"><path d="M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z"/></svg>"#,
        ),
        _ => None,
    }
}

/// Rebuild the footer social container. Only platforms with both a usable
/// URL and a known icon render.
pub(super) fn apply<T: RenderTarget>(target: &mut T, social: &Map<String, Value>) {
    let links = renderable(social)
        .filter_map(|(platform, url)| {
            let icon = icon_markup(platform)?;
            let mut link = Element::new("a");
            link.set_attr("href", url);
            link.set_attr("class", "social-link");
            link.set_attr("target", "_blank");
            link.set_attr("rel", "noopener noreferrer");
            link.set_attr("aria-label", platform);
            link.push(Node::Text(Text::raw(icon)));
            Some(Node::Element(Box::new(link)))
        })
        .collect();
    target.rebuild("footerSocial", links);
}
