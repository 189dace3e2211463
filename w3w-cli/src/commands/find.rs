//! Find command implementation

use super::AppContext;
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{create_formatter, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use w3w_core::Candidate;

/// Arguments for the find command
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Scan this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Candidates found in one input, as byte spans into its text
#[derive(Debug)]
struct ScanResult {
    source: String,
    text: String,
    spans: Vec<(usize, usize)>,
}

impl ScanResult {
    fn scan(source: &InputSource) -> Result<Self> {
        let text = source.read()?;
        let spans = w3w_core::candidate_spans(&text)
            .into_iter()
            .map(|c| (c.start, c.end))
            .collect::<Vec<_>>();
        log::debug!("{}: {} candidate(s)", source.name(), spans.len());
        Ok(Self {
            source: source.name(),
            text,
            spans,
        })
    }

    fn candidates(&self) -> impl Iterator<Item = Candidate<'_>> {
        self.spans.iter().map(|&(start, end)| Candidate {
            text: &self.text[start..end],
            start,
            end,
        })
    }
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let sources = self.sources()?;
        log::info!("Scanning {} input(s)", sources.len());

        let results = sources
            .par_iter()
            .map(ScanResult::scan)
            .collect::<Result<Vec<_>>>()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let format = self.format.unwrap_or(ctx.config.output.format);
        let mut formatter = create_formatter(format, writer, ctx.pretty_json(), results.len() > 1);

        let mut total = 0;
        for result in &results {
            for candidate in result.candidates() {
                formatter.format_candidate(&result.source, &candidate)?;
                total += 1;
            }
        }
        formatter.finish()?;

        log::info!("Found {total} candidate(s)");
        Ok(())
    }

    /// Inputs to scan: inline text, resolved files, or stdin when piped
    fn sources(&self) -> Result<Vec<InputSource>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputSource::Inline(text.clone())]);
        }
        if !self.input.is_empty() {
            return Ok(resolve_patterns(&self.input)?
                .into_iter()
                .map(InputSource::File)
                .collect());
        }
        if io::stdin().is_terminal() {
            return Err(CliError::NoInput.into());
        }
        Ok(vec![InputSource::Stdin])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> FindArgs {
        FindArgs {
            input: Vec::new(),
            text: None,
            output: None,
            format: None,
        }
    }

    #[test]
    fn test_inline_source() {
        let args = FindArgs {
            text: Some("at filled.count.soap".to_string()),
            ..args()
        };
        assert_eq!(
            args.sources().unwrap(),
            vec![InputSource::Inline("at filled.count.soap".to_string())]
        );
    }

    #[test]
    fn test_scan_result_spans() {
        let source = InputSource::Inline("a filled.count.soap b index.home.raft".to_string());
        let result = ScanResult::scan(&source).unwrap();
        let found: Vec<_> = result.candidates().map(|c| c.text).collect();
        assert_eq!(found, vec!["filled.count.soap", "index.home.raft"]);
        assert_eq!(result.source, "<text>");
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "Meet at filled.count.soap").unwrap();
        fs::write(&b, "nothing here\nthen index.home.raft").unwrap();
        let out = dir.path().join("out.json");

        let args = FindArgs {
            input: vec![dir.path().join("*.txt").to_string_lossy().into_owned()],
            output: Some(out.clone()),
            format: Some(OutputFormat::Json),
            ..args()
        };
        args.execute(&AppContext::default()).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["text"], "filled.count.soap");
        assert_eq!(items[1]["text"], "index.home.raft");
        assert!(items[1]["source"].as_str().unwrap().ends_with("b.txt"));
    }

    #[test]
    fn test_missing_files() {
        let args = FindArgs {
            input: vec!["/nonexistent/dir/*.txt".to_string()],
            ..args()
        };
        assert!(args.sources().is_err());
    }
}
