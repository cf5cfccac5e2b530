//! Rendering-target abstraction.
//!
//! Population logic writes through this trait instead of touching the HTML
//! tree directly, so it can be tested against a recording fake. Every
//! operation is a no-op when the named target does not exist: missing
//! template hooks are tolerated by construction, never an error.

use crate::dom::{Document, Element, Node};

pub trait RenderTarget {
    /// Replace the text content of the element with the given id.
    fn set_text(&mut self, id: &str, text: &str);

    /// Set `src` (and optionally `alt`) on an image element.
    fn set_image(&mut self, id: &str, src: &str, alt: Option<&str>);

    /// Set `href` (and optionally the link text) on an anchor element.
    fn set_link(&mut self, id: &str, href: &str, text: Option<&str>);

    /// Set the `value` attribute of an input element.
    fn set_value(&mut self, id: &str, value: &str);

    /// Set an arbitrary attribute on the element with the given id.
    fn set_attr(&mut self, id: &str, name: &str, value: &str);

    /// Set the document title.
    fn set_title(&mut self, title: &str);

    /// Set a meta tag, creating it in `<head>` when absent. OG and Twitter
    /// keys use the `property` attribute, everything else uses `name`.
    fn set_meta(&mut self, key: &str, content: &str);

    /// Set a CSS custom property on the document root.
    fn set_css_var(&mut self, name: &str, value: &str);

    /// Set an attribute on the document root element.
    fn set_root_attr(&mut self, name: &str, value: &str);

    /// Append a hidden input to the form unless one with that id exists.
    fn ensure_hidden_input(&mut self, form_id: &str, id: &str);

    /// Clear the container with the given id and replace its children.
    fn rebuild(&mut self, id: &str, children: Vec<Node>);
}

/// OG/Twitter meta keys are matched by `property`, plain keys by `name`.
fn meta_key_attr(key: &str) -> &'static str {
    if key.starts_with("og:") || key.starts_with("twitter:") {
        "property"
    } else {
        "name"
    }
}

impl RenderTarget for Document {
    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.find_by_id_mut(id) {
            element.set_text(text);
        }
    }

    fn set_image(&mut self, id: &str, src: &str, alt: Option<&str>) {
        if let Some(element) = self.find_by_id_mut(id) {
            element.set_attr("src", src);
            if let Some(alt) = alt {
                element.set_attr("alt", alt);
            }
        }
    }

    fn set_link(&mut self, id: &str, href: &str, text: Option<&str>) {
        if let Some(element) = self.find_by_id_mut(id) {
            element.set_attr("href", href);
            if let Some(text) = text {
                element.set_text(text);
            }
        }
    }

    fn set_value(&mut self, id: &str, value: &str) {
        self.set_attr(id, "value", value);
    }

    fn set_attr(&mut self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.find_by_id_mut(id) {
            element.set_attr(name, value);
        }
    }

    fn set_title(&mut self, title: &str) {
        if let Some(head) = self.head_mut() {
            match head.find_by_tag_mut("title") {
                Some(existing) => existing.set_text(title),
                None => {
                    let mut element = Element::new("title");
                    element.push_text(title);
                    head.push_elem(element);
                }
            }
        }
    }

    fn set_meta(&mut self, key: &str, content: &str) {
        let key_attr = meta_key_attr(key);
        let Some(head) = self.head_mut() else {
            return;
        };

        // Meta tags are direct children of <head>.
        for child in &mut head.children {
            if let Node::Element(element) = child
                && element.tag == "meta"
                && element.attr(key_attr) == Some(key)
            {
                element.set_attr("content", content);
                return;
            }
        }

        let mut meta = Element::new("meta");
        meta.set_attr(key_attr, key);
        meta.set_attr("content", content);
        head.push_elem(meta);
    }

    fn set_css_var(&mut self, name: &str, value: &str) {
        let declaration = format!("{name}: {value};");
        match self.root.attr("style") {
            Some(existing) => {
                let style = format!("{existing} {declaration}");
                self.root.set_attr("style", style);
            }
            None => self.root.set_attr("style", declaration),
        }
    }

    fn set_root_attr(&mut self, name: &str, value: &str) {
        self.root.set_attr(name, value);
    }

    fn ensure_hidden_input(&mut self, form_id: &str, id: &str) {
        if let Some(form) = self.find_by_id_mut(form_id)
            && form.find_by_id(id).is_none()
        {
            let mut input = Element::new("input");
            input.set_attr("type", "hidden");
            input.set_attr("id", id);
            input.set_attr("name", id);
            form.push_elem(input);
        }
    }

    fn rebuild(&mut self, id: &str, children: Vec<Node>) {
        if let Some(element) = self.find_by_id_mut(id) {
            element.children = children;
        }
    }
}
