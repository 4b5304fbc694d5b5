//! ODP file parser implementation.

use crate::frame::apply_frame;
use crate::namespace::OdpNames;
use crate::notes::extract_notes;
use crate::xml::{self, Element};
use odp_core::{Error, Presentation, Result, Slide, SlideBuilder};
use std::io::{Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

/// Archive entry holding the slide descriptions.
pub const CONTENT_ENTRY: &str = "content.xml";

/// Parser for ODP (OpenDocument presentation) files.
#[derive(Debug, Clone)]
pub struct OdpParser {
    names: OdpNames,
}

impl OdpParser {
    /// Create a new ODP parser.
    pub fn new() -> Result<Self> {
        Ok(Self {
            names: OdpNames::resolve()?,
        })
    }

    /// Parse the presentation held in an open archive.
    ///
    /// Fails with [`Error::MissingContent`] when the archive has no
    /// `content.xml`; callers may skip such a container and move on.
    pub fn parse_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        filename: &str,
    ) -> Result<Presentation> {
        for entry in archive.file_names() {
            log::debug!("{}/zipent: {}", filename, entry);
        }

        let content = read_content(archive, filename)?;
        log::info!("{}: loaded {}", filename, CONTENT_ENTRY);

        self.parse_content(&content, filename)
    }

    /// Parse a `content.xml` document.
    pub fn parse_content(&self, xml: &str, filename: &str) -> Result<Presentation> {
        let root = xml::parse(xml)?;
        let mut presentation = Presentation::new(filename);

        for page in root.descendants_named(&self.names.page) {
            presentation.add_slide(self.parse_page(page));
        }

        log::info!("{}: {} slides", filename, presentation.slides.len());
        Ok(presentation)
    }

    /// Build one slide from a `draw:page` element.
    pub fn parse_page(&self, page: &Element) -> Slide {
        let name = page.attribute(&self.names.page_name).map(str::to_string);
        let mut slide = SlideBuilder::new(name.clone());
        let label = name.as_deref().unwrap_or("?");

        for frame in page.children_named(&self.names.frame) {
            let kind = apply_frame(frame, &mut slide, &self.names);
            log::debug!("page: {}: frame {}", label, kind);
        }

        if let Some(notes) = page.find_child(&self.names.notes) {
            slide.set_notes(extract_notes(notes, &self.names));
        }

        slide.build()
    }
}

/// Read the content description out of the archive.
fn read_content<R: Read + Seek>(archive: &mut ZipArchive<R>, filename: &str) -> Result<String> {
    let mut file = archive.by_name(CONTENT_ENTRY).map_err(|e| match e {
        ZipError::FileNotFound => Error::MissingContent(filename.to_string()),
        e => Error::ZipError(format!("Failed to open '{}': {}", CONTENT_ENTRY, e)),
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", CONTENT_ENTRY, e)))?;

    Ok(content)
}
