//! Reads HTML from stdin and writes the distilled result as JSON to stdout.
//!
//! Set `DISTILLER_TEXT_ONLY=1` for plain text content and
//! `DISTILLER_DEBUG=phases|visibility|timing` to collect a debug log.
//! Tracing output goes to stderr, filtered by `RUST_LOG`.

use dom_distiller::{distill_bytes_with_options, DebugLevel, DistillerOptions};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn debug_level_from_env() -> DebugLevel {
    match std::env::var("DISTILLER_DEBUG").as_deref() {
        Ok("phases") => DebugLevel::Phases,
        Ok("visibility") => DebugLevel::Visibility,
        Ok("timing") => DebugLevel::Timing,
        _ => DebugLevel::None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!(%err, "failed to read from stdin");
        std::process::exit(1);
    }

    let options = DistillerOptions {
        debug_level: debug_level_from_env(),
        extract_text_only: std::env::var("DISTILLER_TEXT_ONLY").is_ok_and(|v| v == "1"),
        ..DistillerOptions::default()
    };

    match distill_bytes_with_options(&html, &options) {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(%err, "failed to serialize result");
                std::process::exit(1);
            }
        },
        Err(err) => {
            tracing::error!(%err, "distillation failed");
            std::process::exit(1);
        }
    }
}
