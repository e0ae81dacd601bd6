//! Structured markup produced by widget renderers.
//!
//! Renderers build a [`Markup`] tree from widget state; a render surface
//! serializes it with [`Markup::to_html`] and replaces its whole content.
//! Text and attribute values are escaped on serialization, [`Markup::Raw`]
//! is emitted verbatim and is reserved for trusted post bodies.

use std::fmt::Write as _;

use crate::format::escape_html;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "link", "meta"];

/// A node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// An element with attributes and children.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Trusted HTML, emitted as-is.
    Raw(String),
    /// A sequence of sibling nodes without a wrapper.
    Fragment(Vec<Markup>),
}

/// Attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`.
    Text(String),
    /// Boolean attribute, serialized as a bare name.
    Flag,
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, AttrValue)>,
    children: Vec<Markup>,
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, AttrValue::Text(value.into())));
        self
    }

    /// Set the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Set a boolean attribute when `on` is true.
    pub fn flag_if(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push((name, AttrValue::Flag));
        }
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Markup>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Markup::Text(text.into()))
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Value of a text attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|(n, v)| match v {
            AttrValue::Text(value) if *n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether the attribute is present in any form.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| *n == name)
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Child nodes.
    pub fn child_nodes(&self) -> &[Markup] {
        &self.children
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Markup::Element(element)
    }
}

impl Markup {
    /// An empty fragment.
    pub fn empty() -> Self {
        Markup::Fragment(Vec::new())
    }

    /// Serialize to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Markup::Text(text) => out.push_str(&escape_html(text)),
            Markup::Raw(html) => out.push_str(html),
            Markup::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
            Markup::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    match value {
                        AttrValue::Text(v) => {
                            let _ = write!(out, " {name}=\"{}\"", escape_html(v));
                        }
                        AttrValue::Flag => {
                            let _ = write!(out, " {name}");
                        }
                    }
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Markup::Text(text) | Markup::Raw(text) => out.push_str(text),
            Markup::Fragment(nodes) => nodes.iter().for_each(|n| n.collect_text(out)),
            Markup::Element(el) => el.children.iter().for_each(|n| n.collect_text(out)),
        }
    }

    /// All elements in document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut found);
        found
    }

    fn walk<'a>(&'a self, found: &mut Vec<&'a Element>) {
        match self {
            Markup::Element(el) => {
                found.push(el);
                el.children.iter().for_each(|c| c.walk(found));
            }
            Markup::Fragment(nodes) => nodes.iter().for_each(|c| c.walk(found)),
            Markup::Text(_) | Markup::Raw(_) => {}
        }
    }

    /// Elements carrying the given class, in document order.
    pub fn by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// Concatenated text of the whole tree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }
}
