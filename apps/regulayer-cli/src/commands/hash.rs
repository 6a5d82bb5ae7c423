// hash.rs — `regulayer hash`: show the input/output hash the SDK would send.

use regulayer::hash_payload;

use super::parse_payload;

pub fn execute(raw: &str) -> anyhow::Result<String> {
    let payload = parse_payload("JSON argument", raw)?;
    Ok(hash_payload(payload.as_ref()))
}
