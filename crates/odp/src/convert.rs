//! One parse-then-emit cycle per container.

use crate::assets::ArchiveAssetExporter;
use crate::parser::OdpParser;
use chrono::{DateTime, Utc};
use odp_core::config::output_file_name;
use odp_core::{ConvertOptions, Error, FrontMatter, MarkdownEmitter, Presentation, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Result of converting one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Markdown was written.
    Written {
        output: PathBuf,
        slides: usize,
        images: usize,
    },
    /// The container was skipped and nothing was written.
    Skipped { reason: String },
}

/// Open a container file as a ZIP archive.
pub fn open_container(path: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(path)?;
    ZipArchive::new(BufReader::new(file))
        .map_err(|e| Error::ZipError(format!("Failed to open {}: {}", path.display(), e)))
}

/// Parse a container without writing anything.
pub fn parse_file(path: &Path) -> Result<Presentation> {
    let mut archive = open_container(path)?;
    OdpParser::new()?.parse_archive(&mut archive, &display_name(path))
}

/// Convert one container file into markdown plus images.
///
/// The front matter timestamp is taken when this is called.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    log::info!("{}: opening..", path.display());
    let mut archive = open_container(path)?;
    convert_archive(&mut archive, path, options, Utc::now())
}

/// Convert an already open container.
///
/// `container` only names the output file. A missing `content.xml` is
/// reported as [`Conversion::Skipped`]; every other failure is returned.
pub fn convert_archive<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    container: &Path,
    options: &ConvertOptions,
    date: DateTime<Utc>,
) -> Result<Conversion> {
    let filename = display_name(container);
    let parser = OdpParser::new()?;

    let presentation = match parser.parse_archive(archive, &filename) {
        Ok(presentation) => presentation,
        Err(e) if e.is_recoverable() => {
            log::warn!("{}", e);
            return Ok(Conversion::Skipped {
                reason: e.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    fs::create_dir_all(&options.output_dir)?;
    let output = options.output_path(container);
    let front_matter = FrontMatter::resolve(options, &output_file_name(container), date);

    let mut writer = BufWriter::new(File::create(&output)?);
    let mut exporter = ArchiveAssetExporter::new(archive, &options.output_dir);
    MarkdownEmitter::new().emit(
        &mut writer,
        &front_matter,
        &presentation.slides,
        &mut exporter,
    )?;

    log::info!(
        "{}: wrote {} ({} slides, {} images)",
        filename,
        output.display(),
        presentation.slides.len(),
        exporter.written_count()
    );

    Ok(Conversion::Written {
        output,
        slides: presentation.slides.len(),
        images: presentation.image_count(),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
