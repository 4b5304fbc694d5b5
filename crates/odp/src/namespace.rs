//! Namespace registry for the ODF vocabularies used in `content.xml`.

use odp_core::{Error, Result};

/// Prefixes understood by [`qualify`], with their namespace URIs.
pub const NAMESPACES: [(&str, &str); 7] = [
    ("office", "urn:oasis:names:tc:opendocument:xmlns:office:1.0"),
    ("style", "urn:oasis:names:tc:opendocument:xmlns:style:1.0"),
    ("draw", "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0"),
    ("text", "urn:oasis:names:tc:opendocument:xmlns:text:1.0"),
    ("presentation", "urn:oasis:names:tc:opendocument:xmlns:presentation:1.0"),
    ("svg", "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0"),
    ("xlink", "http://www.w3.org/1999/xlink"),
];

/// An element or attribute name with its namespace URI resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Namespace URI, `None` for names outside any namespace.
    pub namespace: Option<String>,
    pub local: String,
}

impl QualifiedName {
    /// Create a name inside a namespace.
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    /// Create a name outside any namespace.
    pub fn unqualified(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }
}

/// Look up the namespace URI bound to a prefix.
pub fn namespace_uri(prefix: &str) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// Resolve a `prefix:local` tag against the registry.
///
/// Unprefixed names pass through unchanged. A prefix outside the registry
/// means the document uses a schema we do not support.
pub fn qualify(tag: &str) -> Result<QualifiedName> {
    match tag.split_once(':') {
        Some((prefix, local)) => {
            let uri = namespace_uri(prefix)
                .ok_or_else(|| Error::UnknownNamespacePrefix(prefix.to_string()))?;
            Ok(QualifiedName::new(uri, local))
        }
        None => Ok(QualifiedName::unqualified(tag)),
    }
}

/// Every element and attribute name the reader looks at, resolved once.
#[derive(Debug, Clone)]
pub struct OdpNames {
    pub page: QualifiedName,
    pub page_name: QualifiedName,
    pub frame: QualifiedName,
    pub frame_class: QualifiedName,
    pub text_box: QualifiedName,
    pub image: QualifiedName,
    pub href: QualifiedName,
    pub list: QualifiedName,
    pub list_item: QualifiedName,
    pub notes: QualifiedName,
}

impl OdpNames {
    pub fn resolve() -> Result<Self> {
        Ok(Self {
            page: qualify("draw:page")?,
            page_name: qualify("draw:name")?,
            frame: qualify("draw:frame")?,
            frame_class: qualify("presentation:class")?,
            text_box: qualify("draw:text-box")?,
            image: qualify("draw:image")?,
            href: qualify("xlink:href")?,
            list: qualify("text:list")?,
            list_item: qualify("text:list-item")?,
            notes: qualify("presentation:notes")?,
        })
    }
}
