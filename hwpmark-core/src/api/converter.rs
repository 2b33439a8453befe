//! Main converter implementation

use std::time::Instant;

use crate::api::output::{ConversionMetadata, ConversionStats};
use crate::api::{Config, Error, Input, Output};
use crate::domain::{
    fallback_lines, normalize, render, Extraction, HangulTextClassifier, RunExtractor, Structurer,
};

/// HWP to Markdown converter
///
/// Owns no per-call state, so one converter can serve any number of
/// conversions, including concurrent ones.
#[derive(Debug, Clone)]
pub struct Converter {
    extractor: RunExtractor<HangulTextClassifier>,
    structurer: Structurer,
    config: Config,
}

impl Converter {
    /// Create a new converter with default configuration
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> Self {
        let extractor = RunExtractor::new().min_run_length(config.min_run_length);
        let structurer = Structurer::with_rule(config.heading.clone());
        Self {
            extractor,
            structurer,
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract and normalize plain text.
    ///
    /// Fails with [`Error::EmptyInput`] for an empty buffer and with
    /// [`Error::ExtractionFailed`] when no text survives normalization.
    pub fn extract_text(&self, bytes: &[u8]) -> Result<String, Error> {
        if bytes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let text = normalize(&self.extractor.extract(bytes));
        if text.is_empty() {
            return Err(Error::ExtractionFailed);
        }

        Ok(text)
    }

    /// Convert a buffer to Markdown.
    ///
    /// Never fails: empty or unreadable input yields the placeholder document.
    pub fn to_markdown(&self, bytes: &[u8]) -> String {
        let text = normalize(&self.extractor.extract(bytes));
        render(&self.structurer.structure(&text))
    }

    /// Read the input and run the full pipeline
    pub fn convert(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();

        let bytes = input.into_bytes(self.config.max_input_bytes)?;
        let output = self.convert_bytes(&bytes, start);

        log::debug!(
            "converted {} bytes into {} lines in {:?}",
            output.metadata.stats.bytes_scanned,
            output.lines.len(),
            output.metadata.duration
        );

        Ok(output)
    }

    fn convert_bytes(&self, bytes: &[u8], start: Instant) -> Output {
        let Extraction {
            text: raw,
            stats: extraction,
        } = self.extractor.scan(bytes);

        let text = normalize(&raw);
        let is_fallback = text.is_empty();

        let lines = if is_fallback {
            log::warn!(
                "no readable text in {} bytes, substituting placeholder",
                bytes.len()
            );
            fallback_lines()
        } else {
            self.structurer.structure(&text)
        };

        let markdown = render(&lines);
        let stats = ConversionStats::collect(&extraction, &text, &lines);

        Output {
            markdown,
            text,
            lines,
            is_fallback,
            metadata: ConversionMetadata {
                duration: start.elapsed(),
                stats,
            },
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a buffer to Markdown with the default configuration
pub fn to_markdown(bytes: &[u8]) -> String {
    Converter::new().to_markdown(bytes)
}
