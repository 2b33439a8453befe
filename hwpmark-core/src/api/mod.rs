//! Conversion API for hwpmark-core
//!
//! This module wraps the pure domain pipeline with input handling, size
//! limits, configuration and batch execution, and is what the CLI builds on.

mod batch;
mod config;
mod converter;
mod error;
mod input;
mod output;


pub use batch::{BatchJob, BatchReport, BatchSummary, FileReport, FileResult};
pub use config::{defaults, Config, ConfigBuilder};
pub use converter::{to_markdown, Converter};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{ConversionMetadata, ConversionStats, Output};
