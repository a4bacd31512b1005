//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `rebrand-core` just emits events
//! and never touches subscribers.
//!
//! # Verbosity mapping
//!
//! | Flag(s)   | Filter level |
//! |-----------|--------------|
//! | (none)    | WARN         |
//! | `-v`      | INFO         |
//! | `-vv`     | DEBUG        |
//! | `-vvv`    | TRACE        |
//! | `--quiet` | ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

/// Install the global subscriber for this run, writing to stderr.
///
/// Log lines share stderr with the spinner and the prompt, so stdout stays
/// reserved for the summary or JSON result.
pub fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = derive_level(cli);

    // RUST_LOG wins; otherwise the binary and the core crate share one level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rebrand={level},rebrand_core={level}")));

    let use_ansi = !cli.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate `-v` count and `--quiet` into a filter level.
fn derive_level(cli: &Cli) -> &'static str {
    if cli.quiet {
        return "error";
    }
    match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
