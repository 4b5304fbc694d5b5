//! Minimal namespace-aware XML tree.
//!
//! `content.xml` is read into memory in full, so the reader builds a small
//! owned tree with resolved names and keeps every text node, whitespace
//! included, in document order.

use crate::namespace::QualifiedName;
use odp_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with resolved names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: QualifiedName,
    pub attributes: Vec<(QualifiedName, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Whether this element has the given name.
    pub fn is(&self, name: &QualifiedName) -> bool {
        self.name == *name
    }

    /// Value of an attribute.
    pub fn attribute(&self, name: &QualifiedName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Direct child elements with the given name.
    pub fn children_named<'a>(
        &'a self,
        name: &'a QualifiedName,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements().filter(move |e| e.is(name))
    }

    /// First direct child element with the given name.
    pub fn find_child(&self, name: &QualifiedName) -> Option<&Element> {
        self.child_elements().find(|e| e.is(name))
    }

    /// All descendants with the given name, depth-first in document order.
    /// The element itself is not included.
    pub fn descendants_named<'a>(&'a self, name: &QualifiedName) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &QualifiedName, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.is(name) {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Concatenation of every text node below this element.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Text of every given element, concatenated.
pub fn joined_text<'a>(elements: impl IntoIterator<Item = &'a Element>) -> String {
    let mut text = String::new();
    for element in elements {
        element.collect_text(&mut text);
    }
    text
}

/// Parse a document and return its root element.
pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(|e| Error::XmlError(e.to_string()))?;
        let namespace = namespace_of(ns)?;

        match event {
            Event::Start(ref e) => {
                let element = start_element(&reader, namespace, e)?;
                stack.push(element);
            }
            Event::Empty(ref e) => {
                let element = start_element(&reader, namespace, e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::XmlError("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::XmlError(format!("bad text content: {}", e)))?;
                    push_text(parent, &text);
                }
            }
            Event::CData(e) => {
                if let Some(parent) = stack.last_mut() {
                    let bytes = e.into_inner();
                    push_text(parent, &String::from_utf8_lossy(&bytes));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::XmlError(format!(
            "unexpected end of document inside <{}>",
            open.name.local
        )));
    }

    root.ok_or_else(|| Error::XmlError("document has no root element".to_string()))
}

fn namespace_of(ns: ResolveResult) -> Result<Option<String>> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => {
            Ok(Some(String::from_utf8_lossy(uri).into_owned()))
        }
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(Error::XmlError(format!(
            "undeclared namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn start_element(
    reader: &NsReader<&[u8]>,
    namespace: Option<String>,
    start: &BytesStart,
) -> Result<Element> {
    let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut element = Element::new(QualifiedName { namespace, local });

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::XmlError(format!("bad attribute: {}", e)))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (ns, local) = reader.resolve_attribute(attr.key);
        let name = QualifiedName {
            namespace: namespace_of(ns)?,
            local: String::from_utf8_lossy(local.as_ref()).into_owned(),
        };
        let value = attr
            .unescape_value()
            .map_err(|e| Error::XmlError(format!("bad attribute value: {}", e)))?
            .into_owned();
        element.attributes.push((name, value));
    }

    Ok(element)
}

fn push_text(parent: &mut Element, text: &str) {
    if text.is_empty() {
        return;
    }
    match parent.children.last_mut() {
        Some(Node::Text(existing)) => existing.push_str(text),
        _ => parent.children.push(Node::Text(text.to_string())),
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(Error::XmlError("multiple root elements".to_string())),
    }
    Ok(())
}
