//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

const TEMPLATE: &str = r#"# hwpmark configuration

[extraction]
# Shortest run of readable characters kept from the binary stream.
# Shorter runs are treated as noise from record headers.
min_run_length = 3

[markup]
# A line becomes a heading when it is shorter than heading_max_chars,
# has at most heading_max_tokens words and does not end with a terminator.
heading_max_chars = 50
heading_max_tokens = 10
heading_level = 2
heading_terminators = [".", ",", "다"]

[output]
# markdown, text or json
default_format = "markdown"

[performance]
# Number of worker threads (0 = auto)
worker_threads = 0
# Largest accepted input file in MB (0 = unlimited)
max_file_size_mb = 10
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to tune extraction and headings");
        println!("2. Validate your configuration:");
        println!("   hwpmark validate -c {}", self.output.display());
        println!("3. Use it for conversion:");
        println!(
            "   hwpmark convert -i document.hwp -c {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("hwpmark.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("hwpmark.toml"));
    }

    #[test]
    fn test_template_matches_defaults() {
        let config = CliConfig::from_toml(TEMPLATE).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("hwpmark.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[extraction]"));
        assert!(content.contains("[performance]"));
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/hwpmark.toml"),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
