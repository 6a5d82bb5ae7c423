// client.rs — Client factory and decision reporter.
//
// `Client::new` validates config and builds the HTTP transport; it never
// touches the network. `record_decision` turns one `Decision` into one
// `POST /v1/decisions` and interprets the status code. No retries.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::config::ClientConfig;
use crate::decision::{Decision, DecisionEvent};
use crate::error::RegulayerError;
use crate::id::{OsRandom, RandomSource};

/// Path of the decision ingestion endpoint, relative to the base URL.
pub const DECISIONS_PATH: &str = "/v1/decisions";

/// Upper bound on one request, connect through response headers.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the API key alongside the bearer token.
pub const API_KEY_HEADER: &str = "X-Regulayer-Api-Key";

/// Header carrying the decision id for request correlation.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// A configured Regulayer client.
///
/// Immutable after construction and safe to share between threads; clones
/// share the same connection pool. `record_decision` blocks, so call it from
/// a plain thread (or `spawn_blocking`), not from inside an async task.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    endpoint: String,
    http: reqwest::blocking::Client,
    ids: Arc<dyn RandomSource>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the key.
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client from `config`.
    ///
    /// Fails with [`RegulayerError::Configuration`] if the API key is empty.
    /// An empty endpoint is replaced by [`crate::DEFAULT_ENDPOINT`].
    pub fn new(config: ClientConfig) -> Result<Self, RegulayerError> {
        if config.api_key.is_empty() {
            return Err(RegulayerError::Configuration(
                "API key is required".to_string(),
            ));
        }
        if config.demo {
            tracing::debug!("demo mode is reserved and currently has no effect");
        }

        let endpoint = config.resolved_endpoint().to_string();
        let http = build_transport(REQUEST_TIMEOUT)?;

        Ok(Self {
            api_key: config.api_key,
            endpoint,
            http,
            ids: Arc::new(OsRandom),
        })
    }

    /// Replace the random source used for generated decision ids.
    pub fn with_random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.ids = Arc::new(source);
        self
    }

    /// Rebuild the transport with a request timeout other than [`REQUEST_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, RegulayerError> {
        self.http = build_transport(timeout)?;
        Ok(self)
    }

    /// The resolved base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full URL of the decisions endpoint. A trailing `/` on the base is not doubled.
    pub fn decisions_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), DECISIONS_PATH)
    }

    /// Fill in an id for `decision` from this client's random source if it
    /// has none, and return it. Use this to capture the id `record_decision`
    /// will send.
    pub fn ensure_id<'a>(&self, decision: &'a mut Decision) -> &'a str {
        decision.ensure_id_with(self.ids.as_ref())
    }

    /// Resolve the id and defaults of `decision` and build its wire event at `now`.
    pub fn build_event<'a>(&self, decision: &'a Decision, now: DateTime<Utc>) -> DecisionEvent<'a> {
        let decision_id = decision.resolve_id(self.ids.as_ref());
        DecisionEvent::new(decision, decision_id, now)
    }

    /// Report one decision.
    ///
    /// Sends exactly one request. Returns [`RegulayerError::Transport`] if the
    /// exchange fails or times out and [`RegulayerError::Api`] for any status
    /// code >= 400. The response body is ignored. A generated decision id is
    /// not returned; use [`Client::ensure_id`] beforehand to capture it.
    pub fn record_decision(&self, decision: &Decision) -> Result<(), RegulayerError> {
        let event = self.build_event(decision, Utc::now());

        // Unlike input_hash/output_hash, a payload that cannot be encoded is
        // surfaced to the caller and nothing is sent.
        let body = serde_json::to_vec(&event)?;
        let url = self.decisions_url();

        tracing::debug!(
            decision_id = %event.decision_id,
            system = %event.system_name,
            url = %url,
            "sending decision"
        );

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, &event.decision_id)
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        tracing::debug!(decision_id = %event.decision_id, status, "decision response");

        if status >= 400 {
            return Err(RegulayerError::Api { status });
        }
        Ok(())
    }
}

fn build_transport(timeout: Duration) -> Result<reqwest::blocking::Client, RegulayerError> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?)
}
