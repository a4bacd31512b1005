use clap::{Args, Parser, Subcommand};
use rebrand_core::PluginName;
use std::path::PathBuf;

use super::types::{parse_plugin_name, OutputFormat};

/// Turn a plugin boilerplate's placeholder name into your own
#[derive(Parser, Debug)]
#[command(name = "rebrand")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub setup: SetupArgs,

    /// Disable colored output (any non-empty NO_COLOR also disables it)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Read configuration from this file instead of ./.rebrand.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors and hide the spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SetupArgs {
    /// Plugin name to use instead of prompting for one (letters and spaces)
    #[arg(short, long, value_parser = parse_plugin_name)]
    pub name: Option<PluginName>,

    /// Show what would change without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
}
