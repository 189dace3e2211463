//! Typed async client for the what3words v3 API
//!
//! [`Service`] combines the offline recognisers from `w3w-core` with the
//! remote endpoints exposed by [`V3Api`]. Recognition is free and local;
//! anything that needs to know whether an address actually exists goes
//! through the service.
//!
//! # Example
//!
//! ```rust,no_run
//! use w3w_api::{Config, Service};
//!
//! # async fn run() -> w3w_api::Result<()> {
//! let service = Service::new(Config::new("YOUR_API_KEY")?)?;
//!
//! for candidate in service.find_possible_3wa("Deliver to ///filled.count.soap") {
//!     if service.is_valid_3wa(candidate).await? {
//!         println!("{candidate} exists");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod options;
mod request;
pub mod transport;
pub mod v3;

use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{
    AutosuggestResponse, AvailableLanguagesResponse, ConvertGeoJson, ConvertResponse, ErrorCode,
    ErrorResponse, Format, GridSectionGeoJson, GridSectionResponse, Suggestion,
};
pub use error::{ApiError, Result};
pub use options::{AutosuggestOptions, ConvertOptions};
pub use transport::{ReqwestTransport, Transport};
pub use v3::V3Api;
pub use w3w_core::{BoundingBox, Circle, Coordinates, Polygon, Square};

/// Entry point combining local recognition with the remote API
#[derive(Debug, Clone)]
pub struct Service<T = ReqwestTransport> {
    v3: V3Api<T>,
}

impl Service<ReqwestTransport> {
    /// Service using the default reqwest transport
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self { v3: V3Api::new(config)? })
    }
}

impl<T: Transport> Service<T> {
    /// Service using a custom transport
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self {
            v3: V3Api::from_config(config, transport),
        }
    }

    /// The v3 endpoints
    pub fn v3(&self) -> &V3Api<T> {
        &self.v3
    }

    /// Mutable access to the v3 endpoints and their configuration
    pub fn v3_mut(&mut self) -> &mut V3Api<T> {
        &mut self.v3
    }

    /// Substrings of `text` shaped like three-word addresses
    pub fn find_possible_3wa<'t>(&self, text: &'t str) -> Vec<&'t str> {
        w3w_core::find_candidates(text)
    }

    /// True if the whole of `text` is shaped like a three-word address
    pub fn is_possible_3wa(&self, text: &str) -> bool {
        w3w_core::is_full_match(text)
    }

    /// True if `text` looks like a mistyped three-word address
    pub fn did_you_mean(&self, text: &str) -> bool {
        w3w_core::is_likely_typo(text)
    }

    /// Ask the service whether `text` is an existing three-word address
    ///
    /// Inputs that are not even shaped like an address are rejected locally
    /// without a request. Otherwise the top autosuggest result must equal the
    /// input exactly.
    pub async fn is_valid_3wa(&self, text: &str) -> Result<bool> {
        if !self.is_possible_3wa(text) {
            return Ok(false);
        }

        let options = AutosuggestOptions::default().n_results(1);
        let response = self.v3.autosuggest(text, &options).await?;
        let valid = response.top().is_some_and(|top| top.words == text);
        debug!(input = text, valid, "validated address");
        Ok(valid)
    }
}
