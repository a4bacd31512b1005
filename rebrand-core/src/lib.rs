#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod case_model;
pub mod config;
pub mod error;
pub mod manifest;
pub mod operations;
pub mod output;
pub mod placeholder;
pub mod preview;
pub mod prune;
pub mod rename;
pub mod scanner;

pub use case_model::{to_style, PluginName, Style, Variants};
pub use config::Config;
pub use error::SetupError;
pub use manifest::clean_manifest;
pub use operations::{apply_setup, plan_setup, setup_operation, FileEdit, SetupPlan};
pub use output::{OutputFormat, OutputFormatter, RenamedPath, SetupResult, VersionResult};
pub use placeholder::{rewrite_file, Substitution};
pub use preview::render_plan;
pub use prune::prune;
pub use rename::{apply_renames, final_path, plan_renames, Rename, RenameKind};
pub use scanner::{build_globset, scan_tree, ScanOptions};
