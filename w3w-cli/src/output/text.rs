//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};
use w3w_core::Candidate;

/// Plain text formatter - outputs one candidate per line
pub struct TextFormatter<W: Write> {
    writer: W,
    with_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            with_source: false,
        }
    }

    /// Prefix each line with `source:offset:`, grep style
    pub fn with_source(mut self, with_source: bool) -> Self {
        self.with_source = with_source;
        self
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_candidate(&mut self, source: &str, candidate: &Candidate<'_>) -> Result<()> {
        if self.with_source {
            writeln!(
                self.writer,
                "{}:{}: {}",
                source, candidate.start, candidate.text
            )?;
        } else {
            writeln!(self.writer, "{}", candidate.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
