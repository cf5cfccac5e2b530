//! HTML template parsing (`tl` → mutable tree).

use super::{Attrs, Document, Element, Node, Text};
use crate::utils::html::unescape;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("HTML parsing error: {0}")]
    Syntax(String),

    #[error("template has no <html> root element")]
    NoRoot,
}

/// Parse a full HTML document, taking the first `<html>` element as root.
///
/// A leading doctype is discarded; the serializer always re-emits one.
pub fn parse_document(html: &str) -> Result<Document, ParseError> {
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|e| ParseError::Syntax(e.to_string()))?;

    let parser = dom.parser();
    for handle in dom.children() {
        if let Some(tl::Node::Tag(tag)) = handle.get(parser)
            && tag.name().as_utf8_str().eq_ignore_ascii_case("html")
        {
            let root = convert_tag(tag, parser);
            return Ok(Document::new(root));
        }
    }

    Err(ParseError::NoRoot)
}

/// Convert a tl tag into an owned element, recursively.
fn convert_tag(tag: &tl::HTMLTag<'_>, parser: &tl::Parser<'_>) -> Element {
    let name = tag.name().as_utf8_str().to_lowercase();

    let mut attrs = Attrs::new();
    for (key, value) in tag.attributes().iter() {
        let value = value.map(|v| unescape(v.as_ref()).into_owned());
        attrs.set(key.as_ref(), value.unwrap_or_default());
    }

    let mut element = Element::with_attrs(name, attrs);

    for child_handle in tag.children().top().iter() {
        let Some(node) = child_handle.get(parser) else {
            continue;
        };
        match node {
            tl::Node::Tag(child) => element.push_elem(convert_tag(child, parser)),
            tl::Node::Raw(bytes) => {
                let text = bytes.as_utf8_str();
                if text.is_empty() {
                    continue;
                }
                // Template text is kept verbatim so entities and whitespace
                // survive the parse/serialize round trip.
                element.push(Node::Text(Text::raw(text.into_owned())));
            }
            tl::Node::Comment(bytes) => {
                element.push(Node::Comment(bytes.as_utf8_str().into_owned()));
            }
        }
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_page() {
        let doc = parse_document("<html><head></head><body><p id=\"x\">hi</p></body></html>")
            .expect("should parse");
        assert_eq!(doc.root.tag, "html");
        assert!(doc.find_by_id("x").is_some());
    }

    #[test]
    fn test_parse_with_doctype() {
        let doc = parse_document("<!DOCTYPE html>\n<html><body></body></html>");
        assert!(doc.is_ok());
    }

    #[test]
    fn test_no_root_is_error() {
        let result = parse_document("<div>fragment only</div>");
        assert!(matches!(result, Err(ParseError::NoRoot)));
    }

    #[test]
    fn test_attributes_preserved() {
        let doc = parse_document(
            "<html><body><a id=\"l\" href=\"https://example.com\" target=\"_blank\">x</a></body></html>",
        )
        .unwrap();
        let link = doc.find_by_id("l").unwrap();
        assert_eq!(link.attr("href"), Some("https://example.com"));
        assert_eq!(link.attr("target"), Some("_blank"));
    }

    #[test]
    fn test_entity_attributes_decoded() {
        let doc =
            parse_document("<html><body><div id=\"d\" title=\"a &amp; b\"></div></body></html>")
                .unwrap();
        assert_eq!(doc.find_by_id("d").unwrap().attr("title"), Some("a & b"));
    }
}
