//! # Glyphforge console front end
//!
//! Reads a `key: value` configuration block, runs the render pipeline, and
//! prints the art followed by its provenance record.
//!
//! ## Usage
//!
//! ```text
//! glyphforge               # renders the built-in demo configuration
//! glyphforge config.txt    # renders the configuration in config.txt
//! ```
//!
//! Exit status is non-zero on any pipeline failure; the failure itself is
//! reported on stderr as a typed error message, never as placeholder
//! output.

use std::process::ExitCode;

use glyphforge_pipeline::{render, RenderConfig};

/// Demo configuration rendered when no file is given.
const DEMO_CONFIG: &str = "\
pattern: fractalTree
size: 6
threads: 4
encryptionKey: SecretKey1234567
license: GPL-3.0
version: 2.0
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("glyphforge_pipeline=info")
        .init();

    let source = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("error: cannot read configuration `{path}`: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => DEMO_CONFIG.to_string(),
    };

    let config = match RenderConfig::parse(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let bundle = match render(&config) {
        Ok(bundle) => bundle,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== Glyphforge Procedural Art ===\n");
    println!("{}", bundle.art);
    println!("--- Metadata & License ---");
    println!("{}", bundle.metadata);
    println!("--- SHA-256 Fingerprint ---");
    println!("{}", bundle.fingerprint_hex());
    if let Some(envelope) = &bundle.envelope {
        println!("--- Encrypted Provenance (Base64) ---");
        println!("{envelope}");
    }

    ExitCode::SUCCESS
}
