//! Client configuration

use crate::error::{ApiError, Result};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use url::Url;

/// Default service root
pub const DEFAULT_BASE_URL: &str = "https://api.what3words.com";
/// Header carrying the API key
pub const HEADER_API_KEY: &str = "x-api-key";
/// Header identifying the client library and version
pub const HEADER_WRAPPER: &str = "x-w3w-wrapper";
/// Prefix of the wrapper header value
pub const WRAPPER_PREFIX: &str = "what3words-rust";

const API_VERSION_PATH: &str = "v3/";

/// Value sent in the [`HEADER_WRAPPER`] header, `<prefix>/<version>`
pub fn wrapper_header() -> String {
    format!("{WRAPPER_PREFIX}/{}", env!("CARGO_PKG_VERSION"))
}

/// Resolved client configuration
///
/// Every endpoint lives under `<base_url>/v3/`. Headers are attached to every
/// request, the API key and wrapper headers included.
#[derive(Debug, Clone)]
pub struct Config {
    api_base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
}

impl Config {
    /// Configuration with defaults for the given key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Create a builder
    pub fn builder(api_key: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(api_key)
    }

    /// Versioned API root, always ending in `/v3/`
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Overall request timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Point the client at another service root
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.api_base = versioned_base(base_url)?;
        Ok(())
    }

    /// Add or replace a header sent with every request
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Full URL of an endpoint below the versioned root
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_base.join(path.trim_start_matches('/'))?)
    }
}

/// Configuration builder
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    api_key: String,
    base_url: String,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Start from defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: Vec::new(),
            timeout: None,
        }
    }

    /// Use a custom service root, e.g. a self-hosted enterprise server.
    /// `/v3` is appended automatically.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send an extra header with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Send several extra headers with every request
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Abort requests that take longer than `timeout`
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::Config("API key must not be empty".to_string()));
        }

        let api_base = versioned_base(&self.base_url)?;

        let mut headers = HeaderMap::new();
        let (name, mut key) = parse_header(HEADER_API_KEY, &self.api_key)?;
        key.set_sensitive(true);
        headers.insert(name, key);
        let (name, value) = parse_header(HEADER_WRAPPER, &wrapper_header())?;
        headers.insert(name, value);

        for (name, value) in &self.headers {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        Ok(Config {
            api_base,
            headers,
            timeout: self.timeout,
        })
    }
}

fn versioned_base(base_url: &str) -> Result<Url> {
    let root = Url::parse(base_url)?;
    if !matches!(root.scheme(), "http" | "https") {
        return Err(ApiError::Config(format!(
            "base URL must use http or https, got '{}'",
            root.scheme()
        )));
    }
    if root.query().is_some() || root.fragment().is_some() {
        return Err(ApiError::Config(
            "base URL must not carry a query or fragment".to_string(),
        ));
    }
    let mut root = root;
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    Ok(root.join(API_VERSION_PATH)?)
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ApiError::InvalidHeader(format!("invalid header name '{name}'")))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| ApiError::InvalidHeader(format!("invalid value for header '{name}'")))?;
    Ok((header_name, header_value))
}
