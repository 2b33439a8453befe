//! Heuristic text recovery from HWP word-processor files
//!
//! HWP documents are compound binary containers. Instead of walking the
//! container's stream table, this crate scans the raw bytes for runs of
//! UTF-16LE text drawn from a Korean document alphabet, normalizes what it
//! finds and guesses headings from line shape. The result is best-effort
//! Markdown that needs no format parser.
//!
//! # Architecture
//!
//! - **Domain layer**: the extractor, normalizer and structurer as pure functions
//! - **API layer**: inputs, size limits, configuration and batch conversion
//!
//! # Example
//!
//! ```rust
//! use hwpmark_core::{Converter, Input};
//!
//! // "보고서" stored as UTF-16LE, surrounded by container noise
//! let mut bytes = vec![0xD0, 0xCF, 0x11, 0xE0];
//! bytes.extend("보고서".encode_utf16().flat_map(u16::to_le_bytes));
//! bytes.extend([0x00, 0x00]);
//!
//! let converter = Converter::new();
//! let output = converter.convert(Input::from_bytes(bytes)).unwrap();
//! assert_eq!(output.markdown, "## 보고서\n");
//! ```

pub mod api;
pub mod domain;

pub use api::{
    defaults, to_markdown, BatchJob, BatchReport, BatchSummary, Config, ConfigBuilder,
    ConversionMetadata, ConversionStats, Converter, Error, FileReport, FileResult, Input, Output,
    Result,
};
pub use domain::{extract, normalize, render, structure, MarkupLine};
