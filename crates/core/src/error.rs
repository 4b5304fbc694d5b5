//! Error types for ODP conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the input container or write output files.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The container could not be opened or read as a ZIP archive.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// The content description is not well-formed XML.
    #[error("XML parsing error: {0}")]
    XmlError(String),

    /// A tag used a prefix outside the supported namespace registry.
    #[error("Unknown namespace prefix '{0}'")]
    UnknownNamespacePrefix(String),

    /// The container has no content description entry.
    #[error("No content.xml found in {0}")]
    MissingContent(String),

    /// A slide references an embedded resource that is not in the container.
    #[error("Embedded resource '{0}' not found in container")]
    MissingResource(String),
}

impl Error {
    /// Whether a run may continue with the next container after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::MissingContent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_content_is_recoverable() {
        assert!(Error::MissingContent("deck.odp".into()).is_recoverable());
        assert!(!Error::UnknownNamespacePrefix("foo".into()).is_recoverable());
        assert!(!Error::XmlError("unexpected eof".into()).is_recoverable());
        assert!(!Error::ZipError("invalid archive".into()).is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::UnknownNamespacePrefix("table".into()).to_string(),
            "Unknown namespace prefix 'table'"
        );
        assert_eq!(
            Error::MissingContent("deck.odp".into()).to_string(),
            "No content.xml found in deck.odp"
        );
    }
}
