use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SetupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub path: PathBuf,
    pub new_path: PathBuf,
    pub kind: RenameKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameKind {
    File,
    Dir,
}

/// Plan renames for scanned files and the directories that hold them.
///
/// Any file, or directory between `root` and a file, whose own name
/// contains `from` is renamed with every occurrence replaced by `to`.
/// Only the last path component changes per rename, and the list is
/// ordered deepest first so applying it in order never invalidates a
/// later source path.
pub fn plan_renames(root: &Path, files: &[PathBuf], from: &str, to: &str) -> Result<Vec<Rename>> {
    if from.is_empty() || from == to {
        return Ok(Vec::new());
    }

    let mut candidates: BTreeSet<(PathBuf, RenameKind)> = BTreeSet::new();
    for file in files {
        candidates.insert((file.clone(), RenameKind::File));
        for ancestor in file.ancestors().skip(1) {
            if ancestor == root || !ancestor.starts_with(root) {
                break;
            }
            candidates.insert((ancestor.to_path_buf(), RenameKind::Dir));
        }
    }

    let mut renames: Vec<Rename> = candidates
        .into_iter()
        .filter_map(|(path, kind)| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            if !name.contains(from) {
                return None;
            }
            let new_path = path.with_file_name(name.replace(from, to));
            Some(Rename {
                path,
                new_path,
                kind,
            })
        })
        .collect();

    renames.sort_by(|a, b| {
        b.path
            .components()
            .count()
            .cmp(&a.path.components().count())
            .then_with(|| a.path.cmp(&b.path))
    });

    check_conflicts(&renames)?;
    Ok(renames)
}

fn check_conflicts(renames: &[Rename]) -> Result<()> {
    let mut targets: BTreeMap<&Path, Vec<PathBuf>> = BTreeMap::new();
    for rename in renames {
        targets
            .entry(rename.new_path.as_path())
            .or_default()
            .push(rename.path.clone());
    }

    for (target, sources) in targets {
        if sources.len() > 1 {
            return Err(SetupError::RenameConflict {
                sources,
                target: target.to_path_buf(),
            }
            .into());
        }
    }

    for rename in renames {
        if rename.new_path.exists() {
            return Err(SetupError::TargetExists {
                source_path: rename.path.clone(),
                target: rename.new_path.clone(),
            }
            .into());
        }
    }

    Ok(())
}

/// Where `path` lives once `renames` (in plan order) have been applied.
pub fn final_path(path: &Path, renames: &[Rename]) -> PathBuf {
    let mut current = path.to_path_buf();
    for rename in renames {
        if current == rename.path {
            current.clone_from(&rename.new_path);
        } else if let Ok(rest) = current.strip_prefix(&rename.path) {
            current = rename.new_path.join(rest);
        }
    }
    current
}

pub fn apply_renames(renames: &[Rename]) -> Result<()> {
    for rename in renames {
        tracing::debug!(
            "rename {} -> {}",
            rename.path.display(),
            rename.new_path.display()
        );
        fs::rename(&rename.path, &rename.new_path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                rename.path.display(),
                rename.new_path.display()
            )
        })?;
    }
    Ok(())
}
