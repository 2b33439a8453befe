//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use hwpmark_core::FileResult;
use std::io::Write;

/// Markdown formatter - writes documents separated by horizontal rules
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, result: &FileResult) -> Result<()> {
        let Some(markdown) = result.markdown() else {
            return Ok(());
        };

        if self.document_count > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(self.writer)?;
        }
        self.document_count += 1;
        writeln!(self.writer, "{markdown}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
