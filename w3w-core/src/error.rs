//! Core error types (parsing only, no I/O)

use core::fmt;

/// Errors raised while parsing geographic values from text
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Wrong number of comma-separated components
    ComponentCount {
        /// Components the value needs
        expected: usize,
        /// Components that were supplied
        found: usize,
    },
    /// A component is not a finite number
    InvalidNumber(String),
    /// Latitude outside of [-90, 90]
    LatitudeOutOfRange(f64),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::ComponentCount { expected, found } => {
                write!(f, "expected {expected} comma-separated values, found {found}")
            }
            CoreError::InvalidNumber(value) => write!(f, "invalid number: '{value}'"),
            CoreError::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} is outside of [-90, 90]")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
