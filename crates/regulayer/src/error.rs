// error.rs — Error types for the Regulayer SDK.
//
// Every variant is returned to the immediate caller. Nothing here is retried
// or logged internally. Payload hashing is the one place that degrades instead
// of failing (see hasher.rs), so it has no variant.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring a client or reporting a decision.
#[derive(Debug, Error)]
pub enum RegulayerError {
    /// The client configuration is unusable (e.g. the API key is missing).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A config file could not be read.
    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A config file was read but is not valid TOML for [`crate::ClientConfig`].
    #[error("failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The outbound decision payload could not be encoded as JSON.
    /// No request is sent when this happens.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request could not be sent, the connection failed, or it timed out.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status code >= 400. The body is not surfaced.
    #[error("API error: status code {status}")]
    Api { status: u16 },
}

impl RegulayerError {
    /// The HTTP status code carried by an [`RegulayerError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            RegulayerError::Api { status } => Some(*status),
            _ => None,
        }
    }
}
