//! HTML serialization.

use super::{Document, Element, Node};
use crate::utils::html::{escape, escape_attr, is_raw_text_element, is_void_element};

/// Render a document to HTML with a leading doctype.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html>\n");
    render_element(&doc.root, &mut out);
    out
}

fn render_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    for (name, value) in element.attrs.iter() {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');

    if is_void_element(&element.tag) {
        return;
    }

    let raw = is_raw_text_element(&element.tag);
    for child in &element.children {
        match child {
            Node::Element(elem) => render_element(elem, out),
            Node::Text(text) => {
                if raw || text.raw {
                    out.push_str(&text.content);
                } else {
                    out.push_str(&escape(&text.content));
                }
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Attrs, Text};

    #[test]
    fn test_round_trip_keeps_structure() {
        let html = "<html><head><title>T</title></head><body><p id=\"x\">hi</p></body></html>";
        let doc = Document::parse(html).unwrap();
        let rendered = doc.render();

        assert!(rendered.starts_with("<!DOCTYPE html>"));
        assert!(rendered.contains("<p id=\"x\">hi</p>"));
    }

    #[test]
    fn test_config_text_is_escaped() {
        let doc = Document::parse("<html><body><h1 id=\"t\"></h1></body></html>");
        let mut doc = doc.unwrap();
        doc.find_by_id_mut("t").unwrap().set_text("<Acme & Co>");

        assert!(doc.render().contains("&lt;Acme &amp; Co&gt;"));
    }

    #[test]
    fn test_void_elements_not_closed() {
        let mut body = Element::new("body");
        body.push_elem(Element::with_attrs("img", Attrs::from([("src", "a.png")])));
        let mut html = Element::new("html");
        html.push_elem(body);

        let rendered = Document::new(html).render();
        assert!(rendered.contains("<img src=\"a.png\">"));
        assert!(!rendered.contains("</img>"));
    }

    #[test]
    fn test_raw_text_not_escaped() {
        let mut div = Element::new("div");
        div.push(Node::Text(Text::raw("<svg viewBox=\"0 0 24 24\"></svg>")));
        let mut html = Element::new("html");
        html.push_elem(div);

        let rendered = Document::new(html).render();
        assert!(rendered.contains("<svg viewBox=\"0 0 24 24\"></svg>"));
    }

    #[test]
    fn test_attribute_values_escaped() {
        let mut el = Element::new("div");
        el.set_attr("title", "a \"quoted\" value");
        let mut html = Element::new("html");
        html.push_elem(el);

        let rendered = Document::new(html).render();
        assert!(rendered.contains("title=\"a &quot;quoted&quot; value\""));
    }
}
