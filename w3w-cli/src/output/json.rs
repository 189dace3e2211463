//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use w3w_core::Candidate;

/// JSON formatter - outputs candidates as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    candidates: Vec<CandidateData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateData {
    /// Input the candidate was found in
    pub source: String,
    /// The candidate text
    pub text: String,
    /// Byte offset of the candidate in its input
    pub start: usize,
    /// Byte offset one past the candidate
    pub end: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            candidates: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_candidate(&mut self, source: &str, candidate: &Candidate<'_>) -> Result<()> {
        self.candidates.push(CandidateData {
            source: source.to_string(),
            text: candidate.text.to_string(),
            start: candidate.start,
            end: candidate.end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.candidates)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.candidates)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
