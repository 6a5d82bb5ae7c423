// decision.rs — The caller's decision record and the event sent on the wire.
//
// A `Decision` is what the caller fills in. A `DecisionEvent` is the flat JSON
// object the API receives: defaults applied, id resolved, input/output hashed
// and both timestamps stamped. The event borrows from the decision; nothing
// is retained after the request is sent.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::hasher::hash_payload;
use crate::id::{generate_id_with, OsRandom, RandomSource};

/// Wire format version of [`DecisionEvent`].
pub const EVENT_VERSION: &str = "2.0";

/// Every reported decision is already finished when it is sent.
pub const EVENT_STATE_COMPLETED: &str = "completed";

/// Risk level used when the caller leaves it empty.
pub const DEFAULT_RISK_LEVEL: &str = "standard";

/// Model name used when the caller leaves it empty.
pub const DEFAULT_MODEL_NAME: &str = "default";

/// Schema-free JSON object used for decision input, output and metadata.
pub type Payload = Map<String, Value>;

/// One automated decision to report.
///
/// Empty strings mean "not set": `decision_id` is generated, `risk_level`
/// becomes `"standard"` and `model_name` becomes `"default"` when the event
/// is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decision {
    /// Correlation id. Sent as `decision_id` and as the `X-Request-ID` header.
    pub decision_id: String,
    /// Name of the system that made the decision.
    pub system: String,
    /// Free-text risk classification.
    pub risk_level: String,
    /// Free-text model identifier.
    pub model_name: String,
    /// What the system decided on. `None` is sent as `null` with an empty hash.
    pub input: Option<Payload>,
    /// What the system decided. `None` is sent as `null` with an empty hash.
    pub output: Option<Payload>,
    /// Auxiliary context. Not hashed.
    pub metadata: Option<Payload>,
}

impl Decision {
    /// Start a decision for the given originating system.
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            ..Self::default()
        }
    }

    /// Set the decision id and return self (builder pattern).
    pub fn with_id(mut self, decision_id: impl Into<String>) -> Self {
        self.decision_id = decision_id.into();
        self
    }

    /// Set the risk level and return self.
    pub fn with_risk_level(mut self, risk_level: impl Into<String>) -> Self {
        self.risk_level = risk_level.into();
        self
    }

    /// Set the model name and return self.
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Set the input payload and return self.
    pub fn with_input(mut self, input: Payload) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the output payload and return self.
    pub fn with_output(mut self, output: Payload) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the metadata and return self.
    pub fn with_metadata(mut self, metadata: Payload) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Fill in a generated id if none is set, and return the id.
    ///
    /// `record_decision` does not hand back the id it generates, so callers
    /// that need to correlate the report later call this first.
    pub fn ensure_id(&mut self) -> &str {
        self.ensure_id_with(&OsRandom)
    }

    /// Like [`Decision::ensure_id`], drawing a generated id from `source`.
    pub fn ensure_id_with(&mut self, source: &dyn RandomSource) -> &str {
        if self.decision_id.is_empty() {
            self.decision_id = generate_id_with(source);
        }
        &self.decision_id
    }

    /// The id to send: the caller's, or a fresh one drawn from `source`.
    pub fn resolve_id(&self, source: &dyn RandomSource) -> String {
        if self.decision_id.is_empty() {
            generate_id_with(source)
        } else {
            self.decision_id.clone()
        }
    }
}

/// The JSON body of `POST /v1/decisions`.
///
/// Field names are the wire contract; do not rename.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionEvent<'a> {
    pub event_version: &'static str,
    pub event_state: &'static str,
    pub decision_id: String,
    pub system_name: &'a str,
    pub risk_level: &'a str,
    pub model_name: &'a str,
    pub input_hash: String,
    pub output_hash: String,
    pub input: Option<&'a Payload>,
    pub output: Option<&'a Payload>,
    pub metadata: Option<&'a Payload>,
    pub start_timestamp: String,
    pub end_timestamp: String,
}

impl<'a> DecisionEvent<'a> {
    /// Build the wire event for `decision` with an already-resolved id.
    ///
    /// Start and end timestamps are both `now`, formatted as RFC 3339 in UTC
    /// with a `Z` suffix and whole seconds.
    pub fn new(decision: &'a Decision, decision_id: String, now: DateTime<Utc>) -> Self {
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);
        Self {
            event_version: EVENT_VERSION,
            event_state: EVENT_STATE_COMPLETED,
            decision_id,
            system_name: &decision.system,
            risk_level: non_empty_or(&decision.risk_level, DEFAULT_RISK_LEVEL),
            model_name: non_empty_or(&decision.model_name, DEFAULT_MODEL_NAME),
            input_hash: hash_payload(decision.input.as_ref()),
            output_hash: hash_payload(decision.output.as_ref()),
            input: decision.input.as_ref(),
            output: decision.output.as_ref(),
            metadata: decision.metadata.as_ref(),
            start_timestamp: timestamp.clone(),
            end_timestamp: timestamp,
        }
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'static str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}
