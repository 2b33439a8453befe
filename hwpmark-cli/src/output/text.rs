//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use hwpmark_core::FileResult;
use std::io::Write;

/// Text formatter - writes the normalized text of each document
pub struct TextFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, result: &FileResult) -> Result<()> {
        let Ok(output) = &result.outcome else {
            return Ok(());
        };

        if self.document_count > 0 {
            writeln!(self.writer)?;
        }
        self.document_count += 1;
        writeln!(self.writer, "{}", output.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
