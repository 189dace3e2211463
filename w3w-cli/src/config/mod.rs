//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Remote API configuration
    #[serde(default)]
    pub api: ApiSettings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSettings,
}

/// Remote API settings
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    /// API key; `--api-key` and `W3W_API_KEY` take precedence
    pub key: Option<String>,

    /// Service root, for self-hosted deployments
    pub base_url: Option<String>,

    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Default output format for `find`
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Build the client configuration
    pub fn api_config(&self) -> Result<w3w_api::Config> {
        let key = self
            .api
            .key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(CliError::MissingApiKey)?;

        let mut builder = w3w_api::Config::builder(key).headers(self.api.headers.clone());
        if let Some(base_url) = &self.api.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        if let Some(secs) = self.api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build().context("Invalid API configuration")
    }

    /// Commented template written by `generate-config`
    pub fn template() -> &'static str {
        TEMPLATE
    }
}

const TEMPLATE: &str = r#"# w3w configuration

[api]
# API key. --api-key and the W3W_API_KEY environment variable take precedence.
# key = "YOUR_API_KEY"

# Service root for self-hosted deployments; /v3 is appended automatically.
# base_url = "https://api.what3words.com"

# Request timeout in seconds
# timeout_secs = 10

# Extra headers sent with every request
[api.headers]
# x-correlation-id = "my-app"

[output]
# Default format for `find`: "text", "json" or "markdown"
format = "text"

# Pretty print JSON output
pretty_json = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.api.key.is_none());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config = CliConfig::parse(CliConfig::template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::parse(
            r#"
            [api]
            key = "abc"
            timeout_secs = 5

            [api.headers]
            x-trace = "1"

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.key.as_deref(), Some("abc"));
        assert_eq!(config.api.timeout_secs, Some(5));
        assert_eq!(config.api.headers["x-trace"], "1");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::parse("[output]\nformat = \"yaml\"").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("w3w.toml");
        fs::write(&path, "[api]\nbase_url = \"http://localhost:9000\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:9000"));

        let err = CliConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_api_config_requires_key() {
        let err = CliConfig::default().api_config().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingApiKey)
        ));
    }

    #[test]
    fn test_api_config_applies_settings() {
        let mut config = CliConfig::default();
        config.api.key = Some("abc".into());
        config.api.base_url = Some("http://localhost:9000".into());
        config.api.timeout_secs = Some(3);
        config.api.headers.insert("x-trace".into(), "1".into());

        let api = config.api_config().unwrap();
        assert_eq!(api.api_base().as_str(), "http://localhost:9000/v3/");
        assert_eq!(api.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(api.headers()["x-trace"], "1");
        assert_eq!(api.headers()["x-api-key"], "abc");
    }
}
