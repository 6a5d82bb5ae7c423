//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RegulayerError;

/// Production API base URL, used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.regulayer.tech";

/// Configuration consumed by [`crate::Client::new`].
///
/// Can be built in code or loaded from a TOML file:
///
/// ```toml
/// api_key = "rl_live_..."
/// endpoint = "https://api.regulayer.tech"
/// demo = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API credential. Required; an empty key fails client construction.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the API. Empty means [`DEFAULT_ENDPOINT`].
    #[serde(default)]
    pub endpoint: String,

    /// Demo mode flag. Reserved; has no effect on behavior.
    #[serde(default)]
    pub demo: bool,
}

impl ClientConfig {
    /// Config with just an API key; endpoint and demo take their defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Override the endpoint and return self.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RegulayerError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| RegulayerError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content).map_err(|source| RegulayerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The endpoint to use: the configured one, or [`DEFAULT_ENDPOINT`] if empty.
    pub fn resolved_endpoint(&self) -> &str {
        if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            &self.endpoint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_endpoint_resolves_to_default() {
        let config = ClientConfig::new("key");
        assert_eq!(config.resolved_endpoint(), DEFAULT_ENDPOINT);

        let config = config.with_endpoint("http://localhost:8080");
        assert_eq!(config.resolved_endpoint(), "http://localhost:8080");
    }

    #[test]
    fn parse_partial_toml() {
        let config = ClientConfig::from_toml_str(r#"api_key = "rl_test""#).unwrap();
        assert_eq!(config.api_key, "rl_test");
        assert_eq!(config.endpoint, "");
        assert!(!config.demo);
    }

    #[test]
    fn parse_full_toml() {
        let toml = r#"
api_key = "rl_test"
endpoint = "https://staging.regulayer.tech"
demo = true
"#;
        let config = ClientConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.endpoint, "https://staging.regulayer.tech");
        assert!(config.demo);
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("regulayer.toml");
        std::fs::write(&path, "api_key = \"rl_file\"\n").unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config, ClientConfig::new("rl_file"));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let err = ClientConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RegulayerError::ConfigRead { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "api_key = [unclosed").unwrap();

        let err = ClientConfig::load(&path).unwrap_err();
        assert!(matches!(err, RegulayerError::ConfigParse { .. }));
    }
}
