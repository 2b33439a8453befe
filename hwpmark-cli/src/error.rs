//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    NoFilesFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// `-o` names an existing file while several inputs need a directory
    OutputNotDirectory(String),
    /// Some of the files could not be converted
    ConversionFailed {
        /// Number of failed files
        failed: usize,
        /// Number of files attempted
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesFound(patterns) => {
                write!(f, "No files found matching: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputNotDirectory(path) => {
                write!(f, "Output path must be a directory for several inputs: {path}")
            }
            CliError::ConversionFailed { failed, total } => {
                write!(f, "{failed} of {total} files failed to convert")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_files_found_display() {
        let error = CliError::NoFilesFound("*.hwp".to_string());
        assert_eq!(error.to_string(), "No files found matching: *.hwp");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_output_not_directory_display() {
        let error = CliError::OutputNotDirectory("out.md".to_string());
        assert_eq!(
            error.to_string(),
            "Output path must be a directory for several inputs: out.md"
        );
    }

    #[test]
    fn test_conversion_failed_display() {
        let error = CliError::ConversionFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(error.to_string(), "2 of 5 files failed to convert");
    }

    #[test]
    fn test_error_with_korean_path() {
        let error = CliError::NoFilesFound("보고서/*.hwp".to_string());
        assert_eq!(error.to_string(), "No files found matching: 보고서/*.hwp");
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad".into()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("bad"));
    }
}
