//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use w3w_core::Candidate;

/// Markdown formatter - outputs candidates as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    candidate_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            candidate_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_candidate(&mut self, source: &str, candidate: &Candidate<'_>) -> Result<()> {
        self.candidate_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` ({}, byte {})",
            self.candidate_count, candidate.text, source, candidate.start
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total candidates: {}*", self.candidate_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
