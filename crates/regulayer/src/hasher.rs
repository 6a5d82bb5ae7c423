// hasher.rs — SHA-256 hashing of decision inputs and outputs.
//
// All hashes sent to Regulayer are SHA-256, hex-encoded: a 32-byte digest
// rendered as a 64-character lowercase string.
//
// Key order: payloads are converted to a `serde_json::Value` and every object
// is sorted by key before encoding, so two maps with the same entries hash the
// same regardless of insertion order. This holds whether or not some crate in
// the build enables serde_json's `preserve_order` feature.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hash arbitrary bytes, returning a lowercase hex-encoded SHA-256 string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    // `format!("{:x}", ...)` produces lowercase hex
    format!("{:x}", result)
}

/// Hash a UTF-8 string, returning a lowercase hex-encoded SHA-256 string.
pub fn hash_str(s: &str) -> String {
    hash_bytes(s.as_bytes())
}

/// Hash the compact JSON encoding of `value`, with object keys sorted at
/// every depth.
///
/// Returns an empty string when there is nothing to hash (`None`). An empty
/// but present map is still hashed (it encodes as `{}`).
///
/// Best effort: if `value` cannot be encoded as JSON the result is also an
/// empty string. A bad input/output must never stop a decision from being
/// reported, so this failure is intentionally swallowed here, while a failure
/// to encode the full payload is surfaced by the reporter.
pub fn hash_payload<T: Serialize + ?Sized>(value: Option<&T>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match canonical_json(value) {
        Ok(bytes) => hash_bytes(&bytes),
        Err(e) => {
            tracing::debug!(error = %e, "payload not JSON-encodable, sending empty hash");
            String::new()
        }
    }
}

fn canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut value = serde_json::to_value(value)?;
    value.sort_all_objects();
    serde_json::to_vec(&value)
}
