use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Remove setup-only files and directories under `root`.
///
/// Entries that do not exist are skipped. Directories go recursively.
/// Returns the paths actually removed, in entry order.
pub fn prune<S: AsRef<str>>(root: &Path, entries: &[S]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for entry in entries {
        let entry = entry.as_ref();
        if entry.is_empty() {
            continue;
        }
        let path = root.join(entry);
        let Ok(metadata) = fs::symlink_metadata(&path) else {
            continue;
        };

        let result = if metadata.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.with_context(|| format!("Failed to remove {}", path.display()))?;

        tracing::debug!("removed {}", path.display());
        removed.push(path);
    }
    Ok(removed)
}

/// Entries from `entries` that currently exist under `root`.
pub fn existing_entries<S: AsRef<str>>(root: &Path, entries: &[S]) -> Vec<PathBuf> {
    entries
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|entry| !entry.is_empty())
        .map(|entry| root.join(entry))
        .filter(|path| fs::symlink_metadata(path).is_ok())
        .collect()
}
