//! Output formatting module

use anyhow::Result;
use hwpmark_core::FileResult;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown with inferred headings
    Markdown,
    /// Normalized plain text without markup
    Text,
    /// JSON batch summary with one entry per file
    Json,
}

impl OutputFormat {
    /// File extension used for generated output files
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Parse a format name as written in a configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format one conversion result; failures are skipped unless the
    /// format records them
    fn format_result(&mut self, result: &FileResult) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON summary)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for `format` over `writer`
pub fn create_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}

/// Where the converted form of `input` is written
///
/// Without an explicit target the output lands next to the input. An explicit
/// target is a file for a single input and a directory otherwise.
pub fn output_path(
    input: &Path,
    target: Option<&Path>,
    multiple: bool,
    format: OutputFormat,
) -> PathBuf {
    match target {
        Some(dir) if multiple || dir.is_dir() => {
            let mut name = OsString::from(input.file_stem().unwrap_or(input.as_os_str()));
            name.push(".");
            name.push(format.extension());
            dir.join(name)
        }
        Some(file) => file.to_path_buf(),
        None => input.with_extension(format.extension()),
    }
}

/// Destination of each input in order, or the reason it cannot be written
///
/// A destination is refused when it is one of the `sources` or when an
/// earlier input already claimed it.
pub fn plan_output_paths(
    inputs: &[PathBuf],
    sources: &[PathBuf],
    target: Option<&Path>,
    multiple: bool,
    format: OutputFormat,
) -> Vec<Result<PathBuf, String>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();

    inputs
        .iter()
        .map(|input| {
            let destination = output_path(input, target, multiple, format);

            if let Some(source) = overwritten_source(&destination, sources) {
                return Err(format!(
                    "output would overwrite input {}",
                    source.display()
                ));
            }
            if let Some(first) = claimed.get(&destination) {
                return Err(format!(
                    "output {} is already written for {}",
                    destination.display(),
                    first.display()
                ));
            }

            claimed.insert(destination.clone(), input.as_path());
            Ok(destination)
        })
        .collect()
}

/// The source that writing `destination` would replace, if any
pub fn overwritten_source<'a>(destination: &Path, sources: &'a [PathBuf]) -> Option<&'a PathBuf> {
    sources.iter().find(|source| same_file(source, destination))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
