//! Run configuration shared by every container in a conversion run.

use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Settings for one conversion run.
///
/// Built once from the command line and passed by reference into every
/// conversion. Overrides apply to all containers alike: a multi-input run
/// gives every output file the same title and summary.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory receiving the markdown files and exported images.
    pub output_dir: PathBuf,

    /// Title override for the front matter.
    pub title: Option<String>,

    /// Summary override for the front matter.
    pub summary: Option<String>,

    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            title: None,
            summary: None,
            verbosity: 0,
        }
    }
}

impl ConvertOptions {
    /// Create options writing into the given directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set the title override.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Set the summary override.
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    /// Set the verbosity level.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Log level matching the verbosity: warnings are always shown.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Output markdown path for a container.
    ///
    /// The container's file name is cut at its first dot, so `talk.v2.odp`
    /// becomes `talk.md`.
    pub fn output_path(&self, container: &Path) -> PathBuf {
        self.output_dir.join(output_file_name(container))
    }
}

/// Markdown file name for a container path.
pub fn output_file_name(container: &Path) -> String {
    let name = container
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("output");
    let base = name.split('.').next().unwrap_or(name);
    format!("{}.md", base)
}
