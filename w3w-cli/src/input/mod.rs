//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// Where text to scan comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line
    Inline(String),
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Display name used in output
    pub fn name(&self) -> String {
        match self {
            InputSource::Inline(_) => "<text>".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Load the full text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Stdin => FileReader::read_stdin(),
        }
    }
}
