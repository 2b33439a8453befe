//! Error types for the API

use thiserror::Error;

/// Error type for conversion operations
#[derive(Debug, Error)]
pub enum Error {
    /// The input contained no bytes at all
    #[error("no input bytes")]
    EmptyInput,

    /// The input was scanned but yielded no readable text
    #[error("extraction failed: no readable text found")]
    ExtractionFailed,

    /// The input exceeds the configured size limit
    #[error("input of {size} bytes exceeds the {limit} byte limit")]
    InputTooLarge {
        /// Actual input size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// The input was rejected before conversion
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reading the input failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Thread pool setup for batch conversion failed
    #[error("parallel execution failed: {0}")]
    Parallel(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
