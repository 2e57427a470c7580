//! The write gate: shared-passphrase verification.
//!
//! Mutations (append, update) are gated by a single shared passphrase
//! supplied via external configuration. The gate never holds the plaintext:
//! it keeps a SHA-256 digest and verifies candidates by hashing them and
//! comparing digests with a constant-time accumulator, so the comparison
//! cost does not depend on where the digests diverge.
//!
//! A catalog configured without a gate is open-write; authentication UI and
//! session handling remain the host's concern.

use sha2::{Digest, Sha256};
use std::fmt;

/// Verifier for the shared write passphrase.
#[derive(Clone)]
pub struct Gatekeeper {
    digest: [u8; 32],
}

impl Gatekeeper {
    /// Create a gate from the configured plaintext passphrase.
    ///
    /// The plaintext is hashed immediately and not retained.
    #[must_use]
    pub fn new(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        Gatekeeper {
            digest: digest.into(),
        }
    }

    /// Create a gate from a pre-computed SHA-256 digest.
    ///
    /// Lets configuration store the digest instead of the plaintext.
    #[must_use]
    pub fn from_digest(digest: [u8; 32]) -> Self {
        Gatekeeper { digest }
    }

    /// Check a candidate passphrase against the configured one.
    ///
    /// Compares full digests with a fold over every byte, so the work done
    /// is independent of the first differing position.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
        let mut diff = 0u8;
        for (a, b) in self.digest.iter().zip(candidate.iter()) {
            diff |= a ^ b;
        }
        diff == 0
    }
}

impl fmt::Debug for Gatekeeper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the digest.
        f.debug_struct("Gatekeeper").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_matching_passphrase() {
        let gate = Gatekeeper::new("naatak_adman");
        assert!(gate.verify("naatak_adman"));
    }

    #[test]
    fn test_verify_rejects_wrong_passphrase() {
        let gate = Gatekeeper::new("naatak_adman");
        assert!(!gate.verify("naatak_man"));
        assert!(!gate.verify(""));
    }

    #[test]
    fn test_from_digest_matches_new() {
        let digest: [u8; 32] = Sha256::digest(b"secret").into();
        let gate = Gatekeeper::from_digest(digest);
        assert!(gate.verify("secret"));
        assert!(!gate.verify("Secret"));
    }

    #[test]
    fn test_debug_does_not_leak_digest() {
        let gate = Gatekeeper::new("secret");
        let rendered = format!("{gate:?}");
        assert!(!rendered.contains("secret"));
        assert_eq!(rendered, "Gatekeeper { .. }");
    }
}
