//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use w3w_core::Candidate;

/// Trait for candidate output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one candidate found in `source`
    fn format_candidate(&mut self, source: &str, candidate: &Candidate<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One candidate per line
    #[default]
    Text,
    /// JSON array of candidates with byte offsets
    Json,
    /// Markdown list
    Markdown,
}

/// Build the formatter for `format`
///
/// `with_source` prefixes text output with the name of the input the
/// candidate came from; JSON and Markdown always carry it.
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
    with_source: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).with_source(with_source)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Print `value` as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::SharedBuffer;
    use super::*;

    #[test]
    fn test_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"markdown\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_create_formatter_per_format() {
        let candidate = Candidate {
            text: "filled.count.soap",
            start: 0,
            end: 17,
        };

        for (format, expected) in [
            (OutputFormat::Text, "filled.count.soap\n"),
            (OutputFormat::Markdown, "1. `filled.count.soap`"),
            (OutputFormat::Json, "\"text\":\"filled.count.soap\""),
        ] {
            let buffer = SharedBuffer::default();
            let mut formatter = create_formatter(format, buffer.clone(), false, false);
            formatter.format_candidate("<text>", &candidate).unwrap();
            formatter.finish().unwrap();
            assert!(
                buffer.contents().contains(expected),
                "{format:?}: {}",
                buffer.contents()
            );
        }
    }
}
