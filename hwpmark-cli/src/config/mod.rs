//! Configuration module
//!
//! The CLI reads an optional TOML file whose sections mirror the
//! conversion pipeline. Every key has a default, so partial files work.

use anyhow::{Context, Result};
use hwpmark_core::{defaults, Config, ConfigBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Run extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Heading inference settings
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Extraction-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Shortest run of acceptable characters that is kept
    pub min_run_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_run_length: defaults::MIN_RUN_LENGTH,
        }
    }
}

/// Markup-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Headings are shorter than this many characters
    pub heading_max_chars: usize,

    /// Headings have at most this many whitespace-separated tokens
    pub heading_max_tokens: usize,

    /// Markdown level of inferred headings
    pub heading_level: u8,

    /// Lines ending with one of these characters are never headings
    pub heading_terminators: Vec<char>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            heading_max_chars: defaults::HEADING_MAX_CHARS,
            heading_max_tokens: defaults::HEADING_MAX_TOKENS,
            heading_level: defaults::HEADING_LEVEL,
            heading_terminators: defaults::HEADING_TERMINATORS.to_vec(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "markdown".to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Largest accepted input file in MB (0 = unlimited)
    pub max_file_size_mb: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            max_file_size_mb: defaults::MAX_INPUT_BYTES as u64 / BYTES_PER_MB,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        Ok(config)
    }

    /// Output format named by `[output] default_format`
    pub fn default_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_name(&self.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }

    /// Input size cap in bytes, `None` when unlimited
    pub fn max_input_bytes(&self) -> Option<usize> {
        mb_to_bytes(self.performance.max_file_size_mb)
    }

    /// Worker thread count, `None` when chosen automatically
    pub fn worker_threads(&self) -> Option<usize> {
        match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        }
    }

    /// Core configuration builder seeded from this file
    pub fn builder(&self) -> ConfigBuilder {
        Config::builder()
            .min_run_length(self.extraction.min_run_length)
            .heading_max_chars(self.markup.heading_max_chars)
            .heading_max_tokens(self.markup.heading_max_tokens)
            .heading_level(self.markup.heading_level)
            .heading_terminators(self.markup.heading_terminators.iter().copied())
            .max_input_bytes(self.max_input_bytes())
            .threads(self.worker_threads())
    }

    /// Check every section, returning the resulting core configuration
    pub fn validate(&self) -> Result<Config> {
        self.default_format()?;
        self.builder()
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Convert a size in MB to bytes, 0 meaning unlimited
pub fn mb_to_bytes(mb: u64) -> Option<usize> {
    match mb {
        0 => None,
        mb => Some(usize::try_from(mb.saturating_mul(BYTES_PER_MB)).unwrap_or(usize::MAX)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_core() {
        let config = CliConfig::default();
        let core = config.validate().unwrap();
        assert_eq!(core.min_run_length(), 3);
        assert_eq!(core.heading().max_chars, 50);
        assert_eq!(core.heading().max_tokens, 10);
        assert_eq!(core.max_input_bytes(), Some(10 * 1024 * 1024));
        assert_eq!(core.threads(), None);
        assert_eq!(config.default_format().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::from_toml(
            r#"
[markup]
heading_max_chars = 30
heading_terminators = [".", "!", "요"]

[performance]
worker_threads = 4
max_file_size_mb = 0
"#,
        )
        .unwrap();

        assert_eq!(config.extraction, ExtractionConfig::default());
        assert_eq!(config.markup.heading_max_chars, 30);
        assert_eq!(config.markup.heading_max_tokens, 10);
        assert_eq!(config.markup.heading_terminators, vec!['.', '!', '요']);

        let core = config.validate().unwrap();
        assert_eq!(core.threads(), Some(4));
        assert_eq!(core.max_input_bytes(), None);
        assert!(core.heading().is_heading("안녕하세요 여러분"));
        assert!(!core.heading().is_heading("반갑습니다 여러분요"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndefault_format = \"text\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/hwpmark.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = CliConfig::from_toml("[extraction\nmin_run_length = 3").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        let config = CliConfig::from_toml("[extraction]\nmin_run_length = 0").unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::from_toml("[markup]\nheading_level = 7").unwrap();
        assert!(config.validate().is_err());

        let config = CliConfig::from_toml("[output]\ndefault_format = \"html\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unknown output format 'html'"));
    }

    #[test]
    fn test_mb_to_bytes() {
        assert_eq!(mb_to_bytes(0), None);
        assert_eq!(mb_to_bytes(1), Some(1024 * 1024));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }
}
