//! Pure text-recovery algorithms
//!
//! Everything in this module is deterministic and free of I/O:
//! - [`charset`]: the printable alphabet and its classifier
//! - [`extractor`]: run extraction over little-endian code units
//! - [`normalizer`]: control character and whitespace canonicalization
//! - [`structurer`]: heading/body classification and Markdown rendering

pub mod charset;
pub mod extractor;
pub mod normalizer;
pub mod structurer;

pub use charset::{CharClass, CharClassifier, HangulTextClassifier};
pub use extractor::{
    extract, Extraction, ExtractionStats, RunExtractor, DEFAULT_MIN_RUN_LENGTH,
};
pub use normalizer::normalize;
pub use structurer::{
    fallback_lines, is_fallback, render, structure, HeadingRule, MarkupLine, Structurer,
    FALLBACK_HEADING, FALLBACK_MESSAGE,
};
