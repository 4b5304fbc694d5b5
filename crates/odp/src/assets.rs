//! Export of embedded images from the container into the output directory.

use odp_core::{AssetSink, Error, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::PathBuf;
use zip::result::ZipError;
use zip::ZipArchive;

/// Copies images out of an open archive, flattening them by base name.
///
/// Two resources with the same base name land on the same file; the later
/// export overwrites the earlier one and both links point at it.
pub struct ArchiveAssetExporter<'a, R> {
    archive: &'a mut ZipArchive<R>,
    destination: PathBuf,
    written: HashSet<String>,
}

impl<'a, R: Read + Seek> ArchiveAssetExporter<'a, R> {
    pub fn new(archive: &'a mut ZipArchive<R>, destination: impl Into<PathBuf>) -> Self {
        Self {
            archive,
            destination: destination.into(),
            written: HashSet::new(),
        }
    }

    /// Number of distinct files written so far.
    pub fn written_count(&self) -> usize {
        self.written.len()
    }
}

impl<R: Read + Seek> AssetSink for ArchiveAssetExporter<'_, R> {
    fn export(&mut self, resource: &str) -> Result<String> {
        let base = asset_file_name(resource).to_string();

        let mut entry = self.archive.by_name(resource).map_err(|e| match e {
            ZipError::FileNotFound => Error::MissingResource(resource.to_string()),
            e => Error::ZipError(format!("Failed to open '{}': {}", resource, e)),
        })?;

        let target = self.destination.join(&base);
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;

        if !self.written.insert(base.clone()) {
            log::debug!("{}: overwritten by {}", target.display(), resource);
        } else {
            log::debug!("{} -> {}", resource, target.display());
        }

        Ok(base)
    }
}

/// Base file name of a container path, directories stripped.
pub fn asset_file_name(resource: &str) -> &str {
    resource.rsplit('/').next().unwrap_or(resource)
}
