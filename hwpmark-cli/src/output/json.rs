//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use hwpmark_core::{BatchSummary, FileReport, FileResult};
use std::io::Write;

/// JSON formatter - collects per-file reports and writes one batch summary
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<FileReport>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, result: &FileResult) -> Result<()> {
        self.reports.push(result.report());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let summary = BatchSummary::from_reports(std::mem::take(&mut self.reports));
        writeln!(self.writer, "{}", summary.to_json()?)?;
        self.writer.flush()?;
        Ok(())
    }
}
