//! Helpers for building `content.xml` snippets in tests.

use crate::namespace::NAMESPACES;
use crate::xml::{self, Element};

/// Wrap a body in an `office:document-content` root declaring every prefix.
pub fn content(body: &str) -> String {
    let mut doc = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><office:document-content"#);
    for (prefix, uri) in NAMESPACES {
        doc.push_str(&format!(r#" xmlns:{}="{}""#, prefix, uri));
    }
    doc.push('>');
    doc.push_str(body);
    doc.push_str("</office:document-content>");
    doc
}

/// Parse a single element written with the registry prefixes.
pub fn fragment(body: &str) -> Element {
    let root = xml::parse(&content(body)).expect("fragment should parse");
    let first = root.child_elements().next().cloned();
    first.expect("fragment should contain an element")
}
