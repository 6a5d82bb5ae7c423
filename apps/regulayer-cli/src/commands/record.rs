// record.rs — `regulayer record`: report one decision.
//
// Credentials resolve as: command-line flag, then --config file, then the
// REGULAYER_API_KEY / REGULAYER_ENDPOINT environment variables.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use regulayer::{Client, ClientConfig, Decision};

use super::parse_payload;

pub const API_KEY_ENV: &str = "REGULAYER_API_KEY";
pub const ENDPOINT_ENV: &str = "REGULAYER_ENDPOINT";

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Name of the system that made the decision.
    #[arg(long)]
    pub system: String,

    /// Decision id (generated when omitted).
    #[arg(long, default_value = "")]
    pub decision_id: String,

    /// Risk classification (defaults to "standard").
    #[arg(long, default_value = "")]
    pub risk_level: String,

    /// Model identifier (defaults to "default").
    #[arg(long, default_value = "")]
    pub model_name: String,

    /// Decision input as a JSON object.
    #[arg(long)]
    pub input: Option<String>,

    /// Decision output as a JSON object.
    #[arg(long)]
    pub output: Option<String>,

    /// Extra context as a JSON object.
    #[arg(long)]
    pub metadata: Option<String>,

    /// TOML file with api_key / endpoint / demo.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API key (overrides config file and environment).
    #[arg(long)]
    pub api_key: Option<String>,

    /// API base URL (overrides config file and environment).
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Build the client config from flags, config file and environment.
///
/// `env` is injected so tests do not depend on the process environment.
pub fn resolve_config(
    args: &RecordArgs,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };

    if let Some(key) = &args.api_key {
        config.api_key = key.clone();
    } else if config.api_key.is_empty() {
        config.api_key = env(API_KEY_ENV).unwrap_or_default();
    }

    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    } else if config.endpoint.is_empty() {
        config.endpoint = env(ENDPOINT_ENV).unwrap_or_default();
    }

    Ok(config)
}

/// Build the decision described by the flags.
pub fn build_decision(args: &RecordArgs) -> anyhow::Result<Decision> {
    let mut decision = Decision::new(&args.system)
        .with_id(&args.decision_id)
        .with_risk_level(&args.risk_level)
        .with_model_name(&args.model_name);

    if let Some(raw) = &args.input {
        decision.input = parse_payload("--input", raw)?;
    }
    if let Some(raw) = &args.output {
        decision.output = parse_payload("--output", raw)?;
    }
    if let Some(raw) = &args.metadata {
        decision.metadata = parse_payload("--metadata", raw)?;
    }
    Ok(decision)
}

/// Record the decision and return the id it was sent under.
pub fn execute(
    args: &RecordArgs,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<String> {
    let config = resolve_config(args, env)?;
    let client = Client::new(config).with_context(|| {
        format!("pass --api-key, set api_key in --config, or export {API_KEY_ENV}")
    })?;

    let mut decision = build_decision(args)?;
    let id = client.ensure_id(&mut decision).to_string();

    tracing::info!(decision_id = %id, system = %args.system, "recording decision");
    client
        .record_decision(&decision)
        .with_context(|| format!("failed to record decision {id}"))?;
    Ok(id)
}
