//! Digest helper for long subtype discriminators.
//!
//! # Algorithm
//!
//! ```text
//! hex(SHA-256(discriminator_bytes)[..digest_bytes])
//! ```
//!
//! The digest is constructed fresh per call; digest state is inherently
//! sequential, so there is deliberately no shared or thread-local scratch
//! instance here. Truncation to `digest_bytes` keeps uids short and
//! comparison-cheap; collisions are statistically negligible at the
//! default 80 bits and are not handled specially.

use sha2::{Digest, Sha256};

/// Hash a raw discriminator down to a fixed-length hex token.
///
/// Deterministic over the exact byte representation of the input. The
/// returned string is always `2 * digest_bytes` characters (capped at the
/// full 32-byte SHA-256 output).
pub fn digest_discriminator(raw: &[u8], digest_bytes: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw);
    let digest = hasher.finalize();
    let take = digest_bytes.min(digest.len());
    hex::encode(&digest[..take])
}
