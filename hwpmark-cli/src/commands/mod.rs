//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::output::OutputFormat;

pub mod convert;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert HWP files to Markdown or plain text
    Convert(convert::ConvertArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for (format, description) in format_descriptions() {
                    println!("  {:<10} {}", format!("{format:?}").to_lowercase(), description);
                }
            }
        }
    }
}

fn format_descriptions() -> [(OutputFormat, &'static str); 3] {
    [
        (
            OutputFormat::Markdown,
            "Markdown with inferred headings (default, .md)",
        ),
        (OutputFormat::Text, "Normalized plain text (.txt)"),
        (OutputFormat::Json, "JSON batch summary with per-file results"),
    ]
}
