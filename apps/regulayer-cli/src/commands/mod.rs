pub mod hash;
pub mod record;

use anyhow::{bail, Context};
use regulayer::Payload;
use serde_json::Value;

/// Parse a JSON argument that must be an object or `null`.
pub fn parse_payload(flag: &str, raw: &str) -> anyhow::Result<Option<Payload>> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("{flag} is not valid JSON"))?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        other => bail!("{flag} must be a JSON object or null, got: {other}"),
    }
}
