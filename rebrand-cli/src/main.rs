use anyhow::{Context, Result};
use clap::Parser;
use rebrand_core::{OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod logging;
mod prompt;
mod setup;
mod spinner;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    if let Err(e) = logging::init_logging(&cli) {
        eprintln!("Warning: {e:#}");
    }

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let result = match cli.command {
        Some(Commands::Version { output }) => handle_version(output),
        None => setup::handle_setup(&cli.setup, cli.config.as_deref(), cli.quiet, use_color),
    };

    if let Err(e) = result {
        tracing::debug!("setup failed: {e:?}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "rebrand".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
