//! Pipeline orchestration.
//!
//! ## Render protocol
//!
//! 1. **Lookup** — resolve the configured pattern name in the registry;
//!    unknown names abort here with a typed error, no partial output.
//! 2. **Generate** — run the generator. Kinds that ask for a worker (the
//!    fractal tree) go through [`crate::coordinator::run_on_worker`];
//!    everything else runs inline. Output is identical either way.
//! 3. **Metadata** — assemble [`ProvenanceMetadata`] and render its text.
//! 4. **Fingerprint** — SHA-256 over the byte-exact concatenation of art
//!    and metadata text.
//! 5. **Seal** *(optional)* — when the configuration carries an
//!    encryption key, seal (art + metadata + fingerprint) into an
//!    [`EncryptedEnvelope`].

use glyphforge_pattern::{GeneratorRegistry, PatternGenerator, PatternRequest};
use glyphforge_provenance::{seal, EncryptedEnvelope, Fingerprint};

use crate::config::RenderConfig;
use crate::coordinator::run_on_worker;
use crate::error::PipelineError;
use crate::metadata::ProvenanceMetadata;

/// Frame inserted between the art and its metadata before signing.
const METADATA_SEPARATOR: &str = "\n\n---METADATA---\n";
/// Prefix for the fingerprint line inside the sealed plaintext.
const HASH_PREFIX: &str = "\nHASH:";

/// Terminal output of one pipeline invocation. All fields are immutable
/// results; nothing here is written to again after assembly.
#[derive(Debug, Clone)]
pub struct RenderBundle {
    /// The rendered ASCII art, exactly as the generator produced it.
    pub art: String,
    /// The metadata text block that was signed alongside the art.
    pub metadata: String,
    /// SHA-256 over (art + separator + metadata).
    pub fingerprint: Fingerprint,
    /// Sealed provenance record; `None` when no key was configured.
    pub envelope: Option<EncryptedEnvelope>,
}

impl RenderBundle {
    /// The fingerprint as 64 lowercase hex characters.
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint.to_hex()
    }
}

/// Run the full pipeline for one configuration.
pub fn render(config: &RenderConfig) -> Result<RenderBundle, PipelineError> {
    let registry = GeneratorRegistry::new(config.theme);
    let (kind, generator) = registry.lookup(&config.pattern)?;
    let request = PatternRequest::new(kind, config.size, config.threads);

    tracing::debug!(pattern = kind.name(), size = config.size, "generating pattern");
    let art = if kind.uses_worker() {
        run_on_worker(move || generator.generate(&request))?
    } else {
        generator.generate(&request)
    };

    let metadata = ProvenanceMetadata::from_config(config).to_string();
    let signed = format!("{art}{METADATA_SEPARATOR}{metadata}");
    let fingerprint = Fingerprint::of(signed.as_bytes());

    let envelope = match &config.encryption_key {
        Some(key) => {
            let plaintext = format!("{signed}{HASH_PREFIX}{fingerprint}");
            Some(seal(plaintext.as_bytes(), key)?)
        }
        None => None,
    };

    tracing::info!(
        pattern = kind.name(),
        art_bytes = art.len(),
        sealed = envelope.is_some(),
        "render complete"
    );
    Ok(RenderBundle { art, metadata, fingerprint, envelope })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use glyphforge_provenance::open;

    #[test]
    fn unknown_pattern_stops_before_generation() {
        let config = RenderConfig {
            pattern: "nosuchpattern".to_string(),
            ..RenderConfig::default()
        };
        let err = render(&config).unwrap_err();
        assert!(matches!(err, PipelineError::PatternNotFound(_)));
    }

    #[test]
    fn fingerprint_covers_art_and_metadata() {
        let config = RenderConfig::parse("pattern: triangle\nsize: 3\n").unwrap();
        let bundle = render(&config).unwrap();
        let expected =
            Fingerprint::of(format!("{}{METADATA_SEPARATOR}{}", bundle.art, bundle.metadata).as_bytes());
        assert_eq!(bundle.fingerprint, expected);
    }

    #[test]
    fn coordinated_generation_matches_inline_generation() {
        // The worker only changes scheduling; the fractal tree's text must
        // be identical to a direct invocation.
        let config = RenderConfig::parse("pattern: fractalTree\nsize: 5\nthreads: 4\n").unwrap();
        let bundle = render(&config).unwrap();

        let registry = GeneratorRegistry::new(config.theme);
        let (kind, generator) = registry.lookup("fractaltree").unwrap();
        let inline = generator.generate(&PatternRequest::new(kind, 5, 1));
        assert_eq!(bundle.art, inline);
    }

    #[test]
    fn envelope_opens_back_to_the_signed_plaintext() {
        let key = "SecretKey1234567";
        let config =
            RenderConfig::parse(&format!("pattern: lsystem\nsize: 2\nencryptionKey: {key}\n"))
                .unwrap();
        let bundle = render(&config).unwrap();

        let envelope = bundle.envelope.expect("key configured, envelope expected");
        let plaintext = open(&envelope, key).unwrap();
        let expected = format!(
            "{}{METADATA_SEPARATOR}{}{HASH_PREFIX}{}",
            bundle.art,
            bundle.metadata,
            bundle.fingerprint,
        );
        assert_eq!(plaintext, expected.as_bytes());
    }

    #[test]
    fn no_key_no_envelope() {
        let config = RenderConfig::parse("pattern: diamond\nsize: 5\n").unwrap();
        let bundle = render(&config).unwrap();
        assert!(bundle.envelope.is_none());
    }
}
