//! Batch conversion of many inputs
//!
//! Each job is converted independently, so failures stay local to their
//! entry and never abort the rest of the batch.

use crate::api::{Converter, Error, Input, Output};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A named input waiting for conversion
#[derive(Debug)]
pub struct BatchJob {
    /// Display name, usually the source file name
    pub name: String,
    /// Input to convert
    pub input: Input,
}

impl BatchJob {
    /// Create a new job
    pub fn new(name: impl Into<String>, input: Input) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    /// Create a job that reads a file, named after the file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, Input::from_file(path))
    }
}

/// Outcome of a single job
#[derive(Debug)]
pub struct FileResult {
    /// Job name
    pub filename: String,
    /// Conversion output or the error that stopped it
    pub outcome: Result<Output, Error>,
}

impl FileResult {
    /// Create a failed result without running a conversion
    pub fn failed(filename: impl Into<String>, error: Error) -> Self {
        Self {
            filename: filename.into(),
            outcome: Err(error),
        }
    }

    /// Whether the conversion succeeded
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Rendered Markdown for successful conversions
    pub fn markdown(&self) -> Option<&str> {
        self.outcome.as_ref().ok().map(|output| output.markdown.as_str())
    }

    /// Summary entry for serialization
    pub fn report(&self) -> FileReport {
        match &self.outcome {
            Ok(output) => FileReport {
                filename: self.filename.clone(),
                success: true,
                markdown: Some(output.markdown.clone()),
                error: None,
            },
            Err(err) => FileReport {
                filename: self.filename.clone(),
                success: false,
                markdown: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Per-file summary entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileReport {
    /// Job name
    pub filename: String,
    /// Whether the conversion succeeded
    pub success: bool,
    /// Markdown for successful conversions
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub markdown: Option<String>,
    /// Error message for failed conversions
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub error: Option<String>,
}

/// Summary of a whole batch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// The batch itself ran; individual entries may still have failed
    pub success: bool,
    /// Per-file entries in job order
    pub results: Vec<FileReport>,
    /// Number of jobs
    pub total: usize,
    /// Number of successful jobs
    pub succeeded: usize,
}

impl BatchSummary {
    /// Summarize per-file entries, counting the successful ones
    pub fn from_reports(results: Vec<FileReport>) -> Self {
        let succeeded = results.iter().filter(|report| report.success).count();
        Self {
            success: true,
            total: results.len(),
            succeeded,
            results,
        }
    }

    /// Serialize the summary as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Results of a batch, in job order
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-job results
    pub results: Vec<FileResult>,
}

impl BatchReport {
    /// Number of jobs
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of successful jobs
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Number of failed jobs
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// Build the serializable summary
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_reports(self.results.iter().map(FileResult::report).collect())
    }
}

impl Converter {
    /// Convert every job, preserving job order in the report
    pub fn convert_batch(&self, jobs: Vec<BatchJob>) -> Result<BatchReport, Error> {
        self.convert_batch_with(jobs, |_| {})
    }

    /// Convert every job, calling `on_complete` as each one finishes
    pub fn convert_batch_with<F>(
        &self,
        jobs: Vec<BatchJob>,
        on_complete: F,
    ) -> Result<BatchReport, Error>
    where
        F: Fn(&FileResult) + Send + Sync,
    {
        log::info!("converting batch of {} inputs", jobs.len());

        let run = |job: BatchJob| {
            let result = FileResult {
                outcome: self.convert(job.input),
                filename: job.name,
            };
            if let Err(err) = &result.outcome {
                log::warn!("{}: {}", result.filename, err);
            }
            on_complete(&result);
            result
        };

        let results = self.run_jobs(jobs, run)?;
        Ok(BatchReport { results })
    }

    #[cfg(feature = "parallel")]
    fn run_jobs<F>(&self, jobs: Vec<BatchJob>, run: F) -> Result<Vec<FileResult>, Error>
    where
        F: Fn(BatchJob) -> FileResult + Send + Sync,
    {
        if jobs.len() <= 1 || self.config().threads() == Some(1) {
            return Ok(jobs.into_iter().map(run).collect());
        }

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.config().threads() {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| Error::Parallel(e.to_string()))?;

        Ok(pool.install(|| jobs.into_par_iter().map(run).collect()))
    }

    #[cfg(not(feature = "parallel"))]
    fn run_jobs<F>(&self, jobs: Vec<BatchJob>, run: F) -> Result<Vec<FileResult>, Error>
    where
        F: Fn(BatchJob) -> FileResult + Send + Sync,
    {
        Ok(jobs.into_iter().map(run).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Config;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    #[test]
    fn test_batch_preserves_order() {
        let jobs = (0..8)
            .map(|i| {
                let bytes = utf16le(&format!("문서 {i}번"));
                BatchJob::new(format!("doc{i}.hwp"), Input::from_bytes(bytes))
            })
            .collect();

        let report = Converter::new().convert_batch(jobs).unwrap();
        assert_eq!(report.total(), 8);
        assert_eq!(report.succeeded(), 8);
        for (i, result) in report.results.iter().enumerate() {
            assert_eq!(result.filename, format!("doc{i}.hwp"));
            assert_eq!(result.markdown(), Some(format!("## 문서 {i}번\n").as_str()));
        }
    }

    #[test]
    fn test_batch_isolates_failures() {
        let config = Config::builder().max_input_bytes(Some(64)).build().unwrap();
        let converter = Converter::with_config(config).unwrap();

        let jobs = vec![
            BatchJob::new("ok.hwp", Input::from_bytes(utf16le("정상 문서"))),
            BatchJob::new("big.hwp", Input::from_bytes(vec![0u8; 128])),
            BatchJob::from_file("/nonexistent/missing.hwp"),
        ];

        let report = converter.convert_batch(jobs).unwrap();
        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.results[2].filename, "missing.hwp");

        let summary = report.summary();
        assert!(summary.success);
        assert_eq!(summary.succeeded, 1);
        assert!(summary.results[1].error.as_deref().unwrap().contains("exceeds"));
        assert!(summary.results[1].markdown.is_none());
    }

    #[test]
    fn test_callback_runs_per_job() {
        let seen = AtomicUsize::new(0);
        let jobs = (0..5)
            .map(|i| BatchJob::new(format!("{i}"), Input::from_bytes(Vec::new())))
            .collect();

        let report = Converter::new()
            .convert_batch_with(jobs, |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 5);
        // Empty inputs convert to the placeholder, which still counts as success
        assert_eq!(report.succeeded(), 5);
        assert!(report.results.iter().all(|r| r.outcome.as_ref().unwrap().is_fallback));
    }

    #[test]
    fn test_single_thread_batch() {
        let config = Config::builder().threads(Some(1)).build().unwrap();
        let converter = Converter::with_config(config).unwrap();
        let jobs = vec![
            BatchJob::new("a", Input::from_bytes(utf16le("첫째 문서"))),
            BatchJob::new("b", Input::from_bytes(utf16le("둘째 문서"))),
        ];
        let report = converter.convert_batch(jobs).unwrap();
        assert_eq!(report.succeeded(), 2);
    }

    #[test]
    fn test_empty_batch() {
        let report = Converter::new().convert_batch(Vec::new()).unwrap();
        assert_eq!(report.total(), 0);
        assert_eq!(report.summary().results.len(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_summary_json_shape() {
        let mut report = Converter::new()
            .convert_batch(vec![BatchJob::new(
                "a.hwp",
                Input::from_bytes(utf16le("문서 제목")),
            )])
            .unwrap();
        report.results.push(FileResult::failed(
            "b.txt",
            Error::InvalidInput("not an HWP file".into()),
        ));

        let json = report.summary().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["total"], 2);
        assert_eq!(value["succeeded"], 1);
        assert_eq!(value["results"][0]["filename"], "a.hwp");
        assert_eq!(value["results"][0]["markdown"], "## 문서 제목\n");
        assert!(value["results"][0].get("error").is_none());
        assert_eq!(value["results"][1]["success"], false);
        assert_eq!(
            value["results"][1]["error"],
            "Invalid input: not an HWP file"
        );
        assert!(value["results"][1].get("markdown").is_none());
    }
}
