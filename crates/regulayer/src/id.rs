// id.rs — Decision identifier generation.
//
// Generated ids double as the `X-Request-ID` correlation token sent to the
// API, so the default source is the operating system's CSPRNG. The source is
// a trait object so tests (and callers with their own entropy policy) can
// swap it without touching process-wide state.

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Builder;

/// A source of random bytes for decision ids.
///
/// Implementations must be shareable across threads: a single source is held
/// by a [`crate::Client`] and used by concurrent `record_decision` calls.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// The operating system's cryptographically secure generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Generate a random UUID v4 string using the OS CSPRNG.
pub fn generate_id() -> String {
    generate_id_with(&OsRandom)
}

/// Generate a UUID v4 string from 16 bytes drawn from `source`.
///
/// The version nibble (byte 6) is forced to `4` and the variant bits (byte 8)
/// to `10`; the result is lowercase hex grouped 8-4-4-4-12.
pub fn generate_id_with(source: &dyn RandomSource) -> String {
    let mut bytes = [0u8; 16];
    source.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}
