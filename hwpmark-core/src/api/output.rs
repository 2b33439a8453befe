//! Output types for the converter

use std::time::Duration;

use crate::domain::{ExtractionStats, MarkupLine};

/// Conversion output with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Rendered Markdown, never empty
    pub markdown: String,
    /// Normalized plain text (empty when nothing was extracted)
    pub text: String,
    /// Structured lines the Markdown was rendered from
    pub lines: Vec<MarkupLine>,
    /// True when the placeholder was substituted for missing text
    pub is_fallback: bool,
    /// Processing metadata
    pub metadata: ConversionMetadata,
}

/// Metadata about the conversion
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Pipeline statistics
    pub stats: ConversionStats,
}

/// Statistics collected across the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Total bytes scanned
    pub bytes_scanned: usize,
    /// Complete 16-bit code units read
    pub code_units: usize,
    /// Characters kept by the run extractor
    pub chars_extracted: usize,
    /// Runs that reached the minimum length
    pub runs_emitted: usize,
    /// Streaks dropped as noise
    pub runs_discarded: usize,
    /// Characters left after normalization
    pub normalized_chars: usize,
    /// Lines classified as headings
    pub heading_lines: usize,
    /// Lines classified as body text
    pub body_lines: usize,
    /// Blank lines
    pub blank_lines: usize,
}

impl ConversionStats {
    pub(crate) fn collect(extraction: &ExtractionStats, text: &str, lines: &[MarkupLine]) -> Self {
        let mut stats = Self {
            bytes_scanned: extraction.bytes_scanned,
            code_units: extraction.code_units,
            chars_extracted: extraction.chars_extracted,
            runs_emitted: extraction.runs_emitted,
            runs_discarded: extraction.runs_discarded,
            normalized_chars: text.chars().count(),
            ..Default::default()
        };

        for line in lines {
            match line {
                MarkupLine::Blank => stats.blank_lines += 1,
                MarkupLine::Heading { .. } => stats.heading_lines += 1,
                MarkupLine::Body { .. } => stats.body_lines += 1,
            }
        }

        stats
    }
}
