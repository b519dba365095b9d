//! `glyphforge-provenance` — content fingerprinting and the encrypted
//! provenance envelope.
//!
//! ## Crate structure
//!
//! | Module          | Responsibility                                     |
//! |-----------------|----------------------------------------------------|
//! | [`envelope`]    | AES-128-ECB/PKCS7 seal + open, base64 text form    |
//! | [`fingerprint`] | SHA-256 [`Fingerprint`] with lowercase-hex display |
//!
//! Both operations are pure functions of their inputs: no hidden state and
//! no randomness. That makes fingerprints reproducible, and it makes the
//! envelope deterministic, which is an intentional, documented weakness of
//! this illustrative provenance scheme (see [`envelope`]).

pub mod envelope;
pub mod fingerprint;

pub use envelope::{open, seal, EncryptedEnvelope, EnvelopeError, KEY_LEN};
pub use fingerprint::Fingerprint;
