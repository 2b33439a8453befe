//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use hwpmark_core::{BatchJob, Converter, Error, FileResult, Input};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::{mb_to_bytes, CliConfig};
use crate::error::CliError;
use crate::input::{partition_by_extension, resolve_patterns};
use crate::output::{
    create_formatter, overwritten_source, plan_output_paths, OutputFormat, OutputFormatter,
};
use crate::progress::ProgressReporter;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output file, or directory when converting several files
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print results to stdout instead of writing files
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Output format (default: from config, else markdown)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Largest accepted input file in MB (0 = unlimited)
    #[arg(long, value_name = "MB")]
    pub max_size_mb: Option<u64>,

    /// Convert files regardless of their extension
    #[arg(long)]
    pub any_extension: bool,

    /// Number of worker threads
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => file_config.default_format()?,
        };
        let converter = self.build_converter(&file_config)?;

        let files = resolve_patterns(&self.input)?;
        let multiple = files.len() > 1;
        let writes_files = !self.stdout && format != OutputFormat::Json;
        if writes_files && multiple {
            self.check_output_directory()?;
        }

        let (accepted, rejected) = partition_by_extension(files.clone(), self.any_extension);
        let mut skipped: Vec<(PathBuf, FileResult)> = rejected
            .into_iter()
            .map(|path| failed_entry(path, "not an HWP file".to_string()))
            .collect();

        let mut destinations = HashMap::new();
        let to_convert = if writes_files {
            let plan = plan_output_paths(
                &accepted,
                &files,
                self.output.as_deref(),
                multiple,
                format,
            );
            let mut planned = Vec::with_capacity(accepted.len());
            for (path, destination) in accepted.into_iter().zip(plan) {
                match destination {
                    Ok(destination) => {
                        destinations.insert(path.clone(), destination);
                        planned.push(path);
                    }
                    Err(reason) => skipped.push(failed_entry(path, reason)),
                }
            }
            planned
        } else {
            accepted
        };

        let mut results = self.convert_files(&converter, to_convert)?;
        results.append(&mut skipped);
        results.sort_by(|a, b| a.0.cmp(&b.0));

        if format == OutputFormat::Text {
            results.iter_mut().for_each(|(_, result)| reject_fallback(result));
        }

        if writes_files {
            self.write_files(format, &results, &destinations)?;
        } else {
            self.write_stream(format, &results, &files)?;
        }

        let total = results.len();
        let mut failed = 0;
        for (_, result) in &results {
            if let Err(e) = &result.outcome {
                eprintln!("✗ {}: {e}", result.filename);
                failed += 1;
            }
        }

        log::info!("Converted {} of {} files", total - failed, total);
        if failed > 0 {
            return Err(CliError::ConversionFailed { failed, total }.into());
        }
        Ok(())
    }

    /// Several inputs need `-o` to be a directory, existing or not
    fn check_output_directory(&self) -> Result<()> {
        match &self.output {
            Some(path) if path.exists() && !path.is_dir() => {
                Err(CliError::OutputNotDirectory(path.display().to_string()).into())
            }
            _ => Ok(()),
        }
    }

    /// Core converter from the config file with command-line overrides
    fn build_converter(&self, file_config: &CliConfig) -> Result<Converter> {
        let mut builder = file_config.builder();
        if let Some(mb) = self.max_size_mb {
            builder = builder.max_input_bytes(mb_to_bytes(mb));
        }
        if let Some(threads) = self.threads {
            builder = builder.threads(Some(threads));
        }

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        log::debug!(
            "Using {} worker thread(s)",
            config.threads().unwrap_or_else(num_cpus::get)
        );
        Ok(Converter::with_config(config)?)
    }

    fn convert_files(
        &self,
        converter: &Converter,
        paths: Vec<PathBuf>,
    ) -> Result<Vec<(PathBuf, FileResult)>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(paths.len() as u64);

        let jobs = paths
            .iter()
            .map(|path| BatchJob::new(path.display().to_string(), Input::from_file(path)))
            .collect();
        let report =
            converter.convert_batch_with(jobs, |result| progress.file_completed(&result.filename))?;
        progress.finish();

        Ok(paths.into_iter().zip(report.results).collect())
    }

    /// Print every result to stdout, or for JSON to the `-o` file if given
    fn write_stream(
        &self,
        format: OutputFormat,
        results: &[(PathBuf, FileResult)],
        sources: &[PathBuf],
    ) -> Result<()> {
        match &self.output {
            Some(path) => {
                if let Some(source) = overwritten_source(path, sources) {
                    anyhow::bail!("output would overwrite input {}", source.display());
                }
                let file = create_output_file(path)?;
                let mut formatter = create_formatter(format, BufWriter::new(file));
                write_results(formatter.as_mut(), results)?;
                if !self.quiet {
                    println!("✓ Converted: {}", path.display());
                }
                Ok(())
            }
            None => {
                let mut formatter = create_formatter(format, io::stdout().lock());
                write_results(formatter.as_mut(), results)
            }
        }
    }

    /// Write one output file per converted input
    fn write_files(
        &self,
        format: OutputFormat,
        results: &[(PathBuf, FileResult)],
        destinations: &HashMap<PathBuf, PathBuf>,
    ) -> Result<()> {
        for (path, result) in results {
            if !result.is_success() {
                continue;
            }
            let Some(destination) = destinations.get(path) else {
                continue;
            };

            let file = create_output_file(destination)?;
            let mut formatter = create_formatter(format, BufWriter::new(file));
            formatter.format_result(result)?;
            formatter.finish()?;

            if !self.quiet {
                println!("✓ Converted: {}", destination.display());
            }
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Plain text has no placeholder document, so a fallback becomes a failure
fn reject_fallback(result: &mut FileResult) {
    if let Ok(output) = &result.outcome {
        if output.is_fallback {
            let error = if output.metadata.stats.bytes_scanned == 0 {
                Error::EmptyInput
            } else {
                Error::ExtractionFailed
            };
            result.outcome = Err(error);
        }
    }
}

fn write_results(
    formatter: &mut dyn OutputFormatter,
    results: &[(PathBuf, FileResult)],
) -> Result<()> {
    for (_, result) in results {
        formatter.format_result(result)?;
    }
    formatter.finish()
}

fn failed_entry(path: PathBuf, reason: String) -> (PathBuf, FileResult) {
    let result = FileResult::failed(path.display().to_string(), Error::InvalidInput(reason));
    (path, result)
}

fn create_output_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))
}
