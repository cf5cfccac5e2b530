//! Minimal mutable HTML tree.
//!
//! The page populator works against this tree rather than a live browser
//! document: templates are parsed (via `tl`), mutated in place, and
//! serialized back to HTML. Only what a landing template needs is modeled:
//! elements, attributes, text (escaped or raw), and comments.

mod parse;
mod serialize;

pub use parse::ParseError;

/// Ordered attribute list.
///
/// Insertion order is preserved so serialized output stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Attrs {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Text node content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    /// Raw text is serialized verbatim (template text, embedded SVG).
    /// Non-raw text is entity-escaped on output.
    pub raw: bool,
}

impl Text {
    /// Escaped-on-output text (safe for config-provided strings).
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            raw: false,
        }
    }

    /// Verbatim text (trusted template/markup content).
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            raw: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs(tag: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.set(name, value);
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.get(name).is_some()
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Space-separated class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn push_elem(&mut self, element: Element) {
        self.children.push(Node::Element(Box::new(element)));
    }

    pub fn push_text(&mut self, text: &str) {
        self.children.push(Node::Text(Text::new(text)));
    }

    /// Replace all children with a single escaped text node.
    pub fn set_text(&mut self, text: &str) {
        self.children = vec![Node::Text(Text::new(text))];
    }

    /// Remove all children (list containers are cleared before rebuild).
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Depth-first search for a descendant (or self) by id.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(elem) = child
                && let Some(found) = elem.find_by_id_mut(id)
            {
                return Some(found);
            }
        }
        None
    }

    /// Depth-first search by id, immutable.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        for child in &self.children {
            if let Node::Element(elem) = child
                && let Some(found) = elem.find_by_id(id)
            {
                return Some(found);
            }
        }
        None
    }

    /// First descendant (or self) with the given tag name.
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
        if self.tag == tag {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(elem) = child
                && let Some(found) = elem.find_by_tag_mut(tag)
            {
                return Some(found);
            }
        }
        None
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        for child in &self.children {
            if let Node::Element(elem) = child
                && let Some(found) = elem.find_by_tag(tag)
            {
                return Some(found);
            }
        }
        None
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&t.content),
                Node::Element(e) => e.collect_text(out),
                Node::Comment(_) => {}
            }
        }
    }
}

/// A parsed HTML document rooted at `<html>`.
#[derive(Debug, Clone)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse an HTML template.
    pub fn parse(html: &str) -> Result<Self, ParseError> {
        parse::parse_document(html)
    }

    /// Serialize back to HTML, with doctype.
    pub fn render(&self) -> String {
        serialize::render_document(self)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    pub fn head_mut(&mut self) -> Option<&mut Element> {
        self.root.find_by_tag_mut("head")
    }
}
