//! Configuration for the identity canonicalization pipeline.
//!
//! The two knobs here control the verbatim/hash boundary of subtype
//! discriminators. Both default to the values the surrounding ecosystem
//! has always used, and changing either changes every hashed uid, so a
//! full index rebuild is required after any edit.

use serde::{Deserialize, Serialize};

/// Configuration for [`canonicalize`](crate::canonicalize).
///
/// A raw discriminator at most `verbatim_max` bytes long enters the uid
/// unchanged, keeping enum-like tags human-debuggable. Anything longer is
/// replaced by a truncated SHA-256 digest of `digest_bytes` bytes, hex
/// encoded: a fixed `2 * digest_bytes` characters regardless of how much
/// metadata the instance carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalConfig {
    /// Maximum discriminator length (in bytes) kept verbatim.
    pub verbatim_max: usize,
    /// Number of digest bytes kept when hashing long discriminators.
    pub digest_bytes: usize,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            verbatim_max: 20,
            digest_bytes: 10,
        }
    }
}

impl CanonicalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbatim_max(mut self, verbatim_max: usize) -> Self {
        self.verbatim_max = verbatim_max;
        self
    }

    pub fn with_digest_bytes(mut self, digest_bytes: usize) -> Self {
        self.digest_bytes = digest_bytes;
        self
    }
}
