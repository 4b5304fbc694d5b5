//! CLI tool for converting ODP presentations to reveal-hugo markdown.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use odp_core::{ConvertOptions, Presentation};
use odp_reader::Conversion;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Convert ODP presentations into reveal-hugo markdown with images and
/// presenter notes.
#[derive(Parser, Debug)]
#[command(name = "odp2reveal")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input ODP file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory for markdown and images (created if absent)
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Front matter title for every output (default: output file name)
    #[arg(short, long)]
    title: Option<String>,

    /// Front matter summary for every output
    #[arg(short, long)]
    summary: Option<String>,

    /// Print the parsed slides as JSON instead of writing markdown
    #[arg(long)]
    json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> ConvertOptions {
        ConvertOptions::new(&self.output)
            .with_title(self.title.clone())
            .with_summary(self.summary.clone())
            .with_verbosity(self.verbose)
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let options = args.options();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(options.log_level().as_str()),
    )
    .init();

    let skipped = run(&args.input, &options, args.json, &mut io::stdout().lock())?;

    if skipped > 0 {
        log::warn!("{} of {} inputs skipped", skipped, args.input.len());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Process every input in order and return how many were skipped.
///
/// A container without `content.xml` is skipped and the run moves on; any
/// other error stops the run. In JSON mode the parsed slides go to `out` and
/// no files are written.
fn run<W: Write>(
    inputs: &[PathBuf],
    options: &ConvertOptions,
    json: bool,
    out: &mut W,
) -> Result<usize> {
    let mut skipped = 0;

    for input_path in inputs {
        let converted = if json {
            dump_file(input_path, out)?
        } else {
            convert_file(input_path, options)?
        };
        if !converted {
            skipped += 1;
        }
    }

    Ok(skipped)
}

/// Convert a single container; returns false when it was skipped.
fn convert_file(input_path: &Path, options: &ConvertOptions) -> Result<bool> {
    let conversion = odp_reader::convert_file(input_path, options)
        .with_context(|| format!("Failed to convert {}", input_path.display()))?;

    match conversion {
        Conversion::Written {
            output,
            slides,
            images,
        } => {
            log::info!(
                "{}: {} slides, {} images -> {}",
                input_path.display(),
                slides,
                images,
                output.display()
            );
            Ok(true)
        }
        Conversion::Skipped { reason } => {
            log::debug!("{}: skipped ({})", input_path.display(), reason);
            Ok(false)
        }
    }
}

/// Print a container's parsed slides; returns false when it was skipped.
fn dump_file<W: Write>(input_path: &Path, out: &mut W) -> Result<bool> {
    let presentation: Presentation = match odp_reader::parse_file(input_path) {
        Ok(presentation) => presentation,
        Err(e) if e.is_recoverable() => {
            log::warn!("{}", e);
            return Ok(false);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to parse {}", input_path.display()));
        }
    };

    let json = serde_json::to_string_pretty(&presentation).context("Failed to serialize slides")?;
    writeln!(out, "{}", json)?;
    Ok(true)
}
