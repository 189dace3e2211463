//! w3w CLI library
//!
//! This library provides the command-line interface for finding,
//! checking and resolving three-word addresses.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
