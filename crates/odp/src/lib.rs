//! ODP (OpenDocument presentation) reader backend for reveal-hugo markdown
//! conversion.
//!
//! Parses .odp files, which are ZIP archives whose `content.xml` describes
//! every slide, and copies their embedded images.

pub mod assets;
pub mod convert;
pub mod frame;
pub mod list;
pub mod namespace;
pub mod notes;
pub mod parser;
pub mod xml;

#[cfg(test)]
pub(crate) mod test_support;

pub use assets::ArchiveAssetExporter;
pub use convert::{convert_archive, convert_file, open_container, parse_file, Conversion};
pub use frame::FrameKind;
pub use namespace::{qualify, QualifiedName};
pub use parser::OdpParser;
