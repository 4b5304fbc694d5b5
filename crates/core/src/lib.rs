//! Core slide model, run configuration, and reveal-hugo markdown emission
//! for ODP presentation conversion.

pub mod config;
pub mod error;
pub mod markdown;
pub mod types;

pub use config::ConvertOptions;
pub use error::{Error, Result};
pub use markdown::{AssetSink, FrontMatter, MarkdownEmitter, DEFAULT_SUMMARY};
pub use types::{OutlineEntry, Presentation, Slide, SlideBuilder};
