//! Configuration API for conversion

use crate::api::Error;
use crate::domain::{HeadingRule, DEFAULT_MIN_RUN_LENGTH};

/// Default configuration constants
pub mod defaults {
    /// Minimum run length for extracted text
    pub const MIN_RUN_LENGTH: usize = super::DEFAULT_MIN_RUN_LENGTH;

    /// Headings are strictly shorter than this many characters
    pub const HEADING_MAX_CHARS: usize = 50;

    /// Headings have at most this many whitespace-separated tokens
    pub const HEADING_MAX_TOKENS: usize = 10;

    /// Markdown level for detected headings
    pub const HEADING_LEVEL: u8 = 2;

    /// Characters that mark a line as sentence-final
    pub const HEADING_TERMINATORS: [char; 3] = ['.', ',', '다'];

    /// Input size limit in bytes (10MB)
    pub const MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;
}

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) min_run_length: usize,
    pub(crate) heading: HeadingRule,
    pub(crate) max_input_bytes: Option<usize>, // None = unlimited
    pub(crate) threads: Option<usize>,         // None = all available threads
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_run_length: defaults::MIN_RUN_LENGTH,
            heading: HeadingRule {
                max_chars: defaults::HEADING_MAX_CHARS,
                max_tokens: defaults::HEADING_MAX_TOKENS,
                terminators: defaults::HEADING_TERMINATORS.to_vec(),
                level: defaults::HEADING_LEVEL,
            },
            max_input_bytes: Some(defaults::MAX_INPUT_BYTES),
            threads: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Minimum number of consecutive acceptable characters in a run
    pub fn min_run_length(&self) -> usize {
        self.min_run_length
    }

    /// Heading heuristic thresholds
    pub fn heading(&self) -> &HeadingRule {
        &self.heading
    }

    /// Input size limit in bytes
    pub fn max_input_bytes(&self) -> Option<usize> {
        self.max_input_bytes
    }

    /// Worker thread count for batch conversion
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.min_run_length == 0 {
            return Err(Error::Configuration(
                "min_run_length must be greater than 0".into(),
            ));
        }

        if self.heading.max_chars == 0 {
            return Err(Error::Configuration(
                "heading_max_chars must be greater than 0".into(),
            ));
        }

        if self.heading.max_tokens == 0 {
            return Err(Error::Configuration(
                "heading_max_tokens must be greater than 0".into(),
            ));
        }

        if !(1..=6).contains(&self.heading.level) {
            return Err(Error::Configuration(format!(
                "heading_level must be between 1 and 6, got {}",
                self.heading.level
            )));
        }

        if self.max_input_bytes == Some(0) {
            return Err(Error::Configuration(
                "max_input_bytes must be greater than 0".into(),
            ));
        }

        if self.threads == Some(0) {
            return Err(Error::Configuration(
                "threads must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    min_run_length: Option<usize>,
    heading_max_chars: Option<usize>,
    heading_max_tokens: Option<usize>,
    heading_level: Option<u8>,
    heading_terminators: Option<Vec<char>>,
    max_input_bytes: Option<Option<usize>>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum run length
    pub fn min_run_length(mut self, length: usize) -> Self {
        self.min_run_length = Some(length);
        self
    }

    /// Set the exclusive upper bound on heading length in characters
    pub fn heading_max_chars(mut self, chars: usize) -> Self {
        self.heading_max_chars = Some(chars);
        self
    }

    /// Set the maximum number of tokens in a heading
    pub fn heading_max_tokens(mut self, tokens: usize) -> Self {
        self.heading_max_tokens = Some(tokens);
        self
    }

    /// Set the Markdown level of detected headings
    pub fn heading_level(mut self, level: u8) -> Self {
        self.heading_level = Some(level);
        self
    }

    /// Set the characters that disqualify a line from being a heading
    pub fn heading_terminators(mut self, terminators: impl IntoIterator<Item = char>) -> Self {
        self.heading_terminators = Some(terminators.into_iter().collect());
        self
    }

    /// Set the input size limit (None = unlimited)
    pub fn max_input_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(length) = self.min_run_length {
            config.min_run_length = length;
        }

        if let Some(chars) = self.heading_max_chars {
            config.heading.max_chars = chars;
        }

        if let Some(tokens) = self.heading_max_tokens {
            config.heading.max_tokens = tokens;
        }

        if let Some(level) = self.heading_level {
            config.heading.level = level;
        }

        if let Some(terminators) = self.heading_terminators {
            config.heading.terminators = terminators;
        }

        if let Some(limit) = self.max_input_bytes {
            config.max_input_bytes = limit;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}
