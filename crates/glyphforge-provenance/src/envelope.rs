//! Encrypted provenance envelope: AES-128-ECB with PKCS7 padding, encoded
//! as base64 text.
//!
//! ## Deliberate weaknesses
//!
//! This scheme reproduces the original provenance tracker exactly, and the
//! original is illustrative rather than security-grade:
//!
//! - **No initialization vector.** ECB mode encrypts each block
//!   independently, so identical (plaintext, key) pairs always produce
//!   identical ciphertext, and repeated plaintext blocks leak structure.
//! - **Key material comes straight from user input**, truncated or
//!   zero-padded to the cipher's 16-byte key length — no KDF, no salt.
//!
//! Fixing either would change the observable ciphertext, so both stay.
//! Do not reuse this module where confidentiality actually matters.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};
use aes::Aes128;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;

/// AES-128 key length the caller-supplied key is normalized to.
pub const KEY_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The cipher/key combination could not be initialized. Distinct from
    /// generation failures so callers can tell "bad pattern" from "crypto
    /// subsystem broken".
    #[error("encryption unavailable: {0}")]
    CipherInit(String),

    /// The envelope text is not valid base64.
    #[error("envelope is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Decryption produced invalid PKCS7 padding — wrong key or a
    /// corrupted envelope.
    #[error("envelope padding check failed (wrong key or corrupted envelope)")]
    Padding,
}

/// Base64 text form of a sealed provenance record. Terminal and immutable:
/// once produced it is only ever displayed, stored, or opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptedEnvelope(String);

impl EncryptedEnvelope {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EncryptedEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Truncate or zero-pad the UTF-8 bytes of `key` to [`KEY_LEN`].
fn normalize_key(key: &str) -> [u8; KEY_LEN] {
    let mut normalized = [0u8; KEY_LEN];
    let bytes = key.as_bytes();
    let len = bytes.len().min(KEY_LEN);
    normalized[..len].copy_from_slice(&bytes[..len]);
    normalized
}

/// Encrypt `plaintext` under `key`.
///
/// Deterministic: the same (plaintext, key) pair always seals to the same
/// envelope. See the module docs for why that is kept.
pub fn seal(plaintext: &[u8], key: &str) -> Result<EncryptedEnvelope, EnvelopeError> {
    let key = normalize_key(key);
    let cipher = Aes128EcbEnc::new_from_slice(&key)
        .map_err(|e| EnvelopeError::CipherInit(e.to_string()))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    Ok(EncryptedEnvelope(BASE64.encode(ciphertext)))
}

/// Decrypt an envelope sealed with [`seal`] under the same `key`.
pub fn open(envelope: &EncryptedEnvelope, key: &str) -> Result<Vec<u8>, EnvelopeError> {
    let key = normalize_key(key);
    let ciphertext = BASE64.decode(envelope.as_str())?;
    let cipher = Aes128EcbDec::new_from_slice(&key)
        .map_err(|e| EnvelopeError::CipherInit(e.to_string()))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| EnvelopeError::Padding)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "SecretKey1234567";

    #[test]
    fn seal_then_open_roundtrips() {
        let plaintext = b"rendered art\n\n---METADATA---\nPattern: lsystem";
        let envelope = seal(plaintext, KEY).unwrap();
        let recovered = open(&envelope, KEY).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn sealing_is_deterministic() {
        // No IV: identical plaintext + key must yield identical ciphertext.
        // This pins the documented weakness rather than fixing it.
        let plaintext = b"same bytes in, same bytes out";
        assert_eq!(seal(plaintext, KEY).unwrap(), seal(plaintext, KEY).unwrap());
    }

    #[test]
    fn wrong_key_fails_to_open() {
        let envelope = seal(b"some provenance record", KEY).unwrap();
        assert!(matches!(
            open(&envelope, "a completely different key"),
            Err(EnvelopeError::Padding)
        ));
    }

    #[test]
    fn envelope_text_is_base64() {
        let envelope = seal(b"text-safe encoding", KEY).unwrap();
        assert!(envelope
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')));
        assert!(BASE64.decode(envelope.as_str()).is_ok());
    }

    #[test]
    fn long_keys_truncate_to_the_cipher_length() {
        // Only the first 16 bytes of the key matter.
        let plaintext = b"truncation check";
        let long = seal(plaintext, "SecretKey1234567EXTRA-TAIL").unwrap();
        let short = seal(plaintext, "SecretKey1234567").unwrap();
        assert_eq!(long, short);
    }

    #[test]
    fn short_keys_zero_pad() {
        let plaintext = b"padding check";
        let a = seal(plaintext, "k").unwrap();
        let b = seal(plaintext, "k\0\0").unwrap();
        assert_eq!(a, b);
        assert_eq!(open(&a, "k").unwrap(), plaintext);
    }

    #[test]
    fn garbage_envelope_is_a_typed_error() {
        let not_base64 = EncryptedEnvelope("!!! not base64 !!!".to_string());
        assert!(matches!(open(&not_base64, KEY), Err(EnvelopeError::Encoding(_))));
    }

    #[test]
    fn ciphertext_length_is_padded_to_whole_blocks() {
        // PKCS7 always pads, so 16 plaintext bytes become 32 ciphertext
        // bytes (two blocks).
        let envelope = seal(&[0u8; 16], KEY).unwrap();
        let raw = BASE64.decode(envelope.as_str()).unwrap();
        assert_eq!(raw.len(), 32);
    }
}
