use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfig;

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Path fragments that mark an entry as one to rename and rewrite
    pub allow: Vec<String>,
    /// Glob patterns skipped even when allow-listed
    pub exclude: Vec<String>,
}

impl From<&ScanConfig> for ScanOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            allow: config.allow.clone(),
            exclude: config.exclude.clone(),
        }
    }
}

impl ScanOptions {
    pub fn is_allowed(&self, relative: &str) -> bool {
        self.allow
            .iter()
            .any(|key| !key.is_empty() && relative.contains(key.as_str()))
    }
}

/// Root-relative path with `/` separators, the form allow-list keys are matched against.
pub fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.trim_end_matches('/');
        builder.add(Glob::new(pattern)?);

        // Bare names match at any depth
        if !pattern.contains('/') && !pattern.starts_with("**") {
            builder.add(Glob::new(&format!("**/{pattern}"))?);
        }

        // Anything under a directory pattern is excluded with it
        if !pattern.contains('*') && !pattern.contains('?') {
            builder.add(Glob::new(&format!("{pattern}/**"))?);
        }
    }
    Ok(Some(builder.build()?))
}

/// Walk `root` and collect every allow-listed file.
///
/// Directories whose relative path matches no allow-list key are not
/// descended into. Entries come back sorted by file name within each
/// directory so repeated scans of the same tree agree.
pub fn scan_tree(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let excludes = build_globset(&options.exclude).context("Invalid exclude pattern")?;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let relative = relative_key(root, entry.path());
            if excludes.as_ref().is_some_and(|set| set.is_match(&relative)) {
                return false;
            }
            options.is_allowed(&relative)
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        if entry.file_type().is_file() {
            tracing::trace!("matched {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    tracing::debug!("scan found {} files under {}", files.len(), root.display());
    Ok(files)
}
