use anyhow::{Context, Result};
use rebrand_core::{setup_operation, Config, OutputFormatter};
use std::path::Path;

use crate::cli::{OutputFormat, SetupArgs};
use crate::prompt::prompt_for_name;
use crate::spinner::Spinner;

pub fn handle_setup(
    args: &SetupArgs,
    config_path: Option<&Path>,
    quiet: bool,
    use_color: bool,
) -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;

    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(&root)?,
    };

    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_for_name()?,
    };

    let spinner = Spinner::start("Processing...", quiet || args.output == OutputFormat::Json);
    let (result, preview) = match setup_operation(&root, &name, &config, args.dry_run, use_color)
    {
        Ok(outcome) => {
            spinner.succeed("Complete!");
            outcome
        },
        Err(e) => {
            spinner.fail("Failed!");
            return Err(e);
        },
    };

    if args.output == OutputFormat::Summary {
        if let Some(preview) = preview {
            println!("{preview}");
        }
    }

    println!("{}", result.format(args.output.into()).trim_end());
    Ok(())
}
