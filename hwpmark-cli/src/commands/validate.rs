//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::from_file(&self.config)
            .and_then(|config| config.validate().map(|core| (config, core)));

        match checked {
            Ok((config, core)) => {
                println!("✓ Configuration is valid!");
                println!("  Minimum run length: {}", core.min_run_length());
                println!(
                    "  Headings: level {}, < {} chars, <= {} tokens",
                    core.heading().level,
                    core.heading().max_chars,
                    core.heading().max_tokens
                );
                println!("  Default format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
