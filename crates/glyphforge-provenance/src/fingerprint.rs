//! SHA-256 content fingerprint.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A 256-bit content digest, displayed as 64 lowercase hex characters.
///
/// Deterministic: identical input bytes always yield identical
/// fingerprints, and any single-byte change flips the digest with
/// overwhelming probability. The underlying digest is a pure-Rust SHA-256,
/// so computing a fingerprint cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Digest the exact bytes given, with no framing or normalization.
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hasher.finalize().into())
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hexadecimal rendering (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn repeated_calls_agree() {
        let input = b"pattern output + metadata";
        assert_eq!(Fingerprint::of(input), Fingerprint::of(input));
    }

    #[test]
    fn hex_form_is_64_lowercase_characters() {
        let hex = Fingerprint::of(b"anything").to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hex, Fingerprint::of(b"anything").to_string());
    }

    #[test]
    fn known_vector_empty_input() {
        // SHA-256 of the empty string, per FIPS 180-4.
        assert_eq!(
            Fingerprint::of(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        );
    }

    #[test]
    fn single_byte_flips_change_the_digest() {
        // Statistical avalanche check: flip one random byte in a random
        // input and require a different fingerprint every time. A SHA-256
        // collision here would be astronomically unlikely.
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let mut input = vec![0u8; 64];
            rng.fill(input.as_mut_slice());
            let original = Fingerprint::of(&input);

            let position = rng.gen_range(0..input.len());
            let flip = 1u8 << rng.gen_range(0..8);
            input[position] ^= flip;

            assert_ne!(original, Fingerprint::of(&input));
        }
    }

    #[test]
    fn avalanche_affects_roughly_half_the_bits() {
        let base = Fingerprint::of(b"glyphforge avalanche sample");
        let flipped = Fingerprint::of(b"glyphforge avalanche sampls");
        let differing: u32 = base
            .as_bytes()
            .iter()
            .zip(flipped.as_bytes())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        // 256 output bits; a healthy digest lands well inside this band.
        assert!((64..=192).contains(&differing), "only {differing} bits differ");
    }
}
