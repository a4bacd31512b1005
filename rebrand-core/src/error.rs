use std::path::PathBuf;
use thiserror::Error;

/// Failures the setup pipeline reports by name.
///
/// Filesystem and parsing errors travel as `anyhow::Error` with context
/// attached; these are the cases callers may want to match on.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Please provide a valid plugin name. Example: WP Bulk Uploader")]
    InvalidName(String),

    #[error(
        "Unable to find files for replacements. Please try to reclone the site and run the setup again."
    )]
    NoFiles,

    #[error("Multiple paths would be renamed to {}: {}", target.display(), format_sources(sources))]
    RenameConflict {
        sources: Vec<PathBuf>,
        target: PathBuf,
    },

    #[error("Cannot rename {} to {}: target already exists", source_path.display(), target.display())]
    TargetExists {
        source_path: PathBuf,
        target: PathBuf,
    },

    #[error("Invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

fn format_sources(sources: &[PathBuf]) -> String {
    sources
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
