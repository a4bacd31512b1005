use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::case_model::{PluginName, Variants};
use crate::config::Config;
use crate::error::SetupError;
use crate::manifest::clean_manifest;
use crate::output::SetupResult;
use crate::placeholder::{count_in_file, rewrite_file, Substitution};
use crate::prune::{existing_entries, prune};
use crate::rename::{apply_renames, final_path, plan_renames, Rename};
use crate::scanner::{scan_tree, ScanOptions};

/// Content changes expected in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEdit {
    /// Path once renames are applied
    pub path: PathBuf,
    pub replacements: usize,
}

/// Everything a setup run will do, computed without touching the tree.
#[derive(Debug, Clone)]
pub struct SetupPlan {
    pub root: PathBuf,
    pub name: PluginName,
    pub placeholder: Variants,
    pub variants: Variants,
    pub files: Vec<PathBuf>,
    pub renames: Vec<Rename>,
    pub edits: Vec<FileEdit>,
    substitution: Substitution,
}

impl SetupPlan {
    pub fn total_replacements(&self) -> usize {
        self.edits.iter().map(|e| e.replacements).sum()
    }
}

fn placeholder_variants(config: &Config) -> Result<Variants> {
    let placeholder = PluginName::parse(&config.placeholder)
        .with_context(|| format!("Invalid placeholder in config: '{}'", config.placeholder))?;
    Ok(Variants::derive_with_prefixes(
        &placeholder,
        &config.uppercase_prefixes,
    ))
}

pub fn plan_setup(root: &Path, name: &PluginName, config: &Config) -> Result<SetupPlan> {
    let placeholder = placeholder_variants(config)?;
    let variants = Variants::derive_with_prefixes(name, &config.uppercase_prefixes);

    tracing::info!("scanning {}", root.display());
    let files = scan_tree(root, &ScanOptions::from(&config.scan))?;
    if files.is_empty() {
        return Err(SetupError::NoFiles.into());
    }

    let renames = plan_renames(root, &files, &placeholder.domain, &variants.domain)?;
    let substitution =
        Substitution::new(&placeholder, &variants).context("Failed to build placeholder pattern")?;

    let mut edits = Vec::new();
    for file in &files {
        let replacements = count_in_file(file, &substitution)?;
        if replacements > 0 {
            edits.push(FileEdit {
                path: final_path(file, &renames),
                replacements,
            });
        }
    }

    tracing::info!(
        "planned {} renames and {} replacements in {} files",
        renames.len(),
        edits.iter().map(|e| e.replacements).sum::<usize>(),
        edits.len()
    );

    Ok(SetupPlan {
        root: root.to_path_buf(),
        name: name.clone(),
        placeholder,
        variants,
        files,
        renames,
        edits,
        substitution,
    })
}

/// Carry out a plan: rename, rewrite contents, clean the manifest, prune.
///
/// Steps run in that order and the first failure stops the run. Nothing
/// already done is rolled back.
pub fn apply_setup(plan: &SetupPlan, config: &Config) -> Result<SetupResult> {
    apply_renames(&plan.renames)?;

    let mut files_changed = 0;
    let mut replacements = 0;
    for file in &plan.files {
        let path = final_path(file, &plan.renames);
        let count = rewrite_file(&path, &plan.substitution)?;
        if count > 0 {
            files_changed += 1;
            replacements += count;
        }
    }
    tracing::info!("replaced {replacements} placeholders in {files_changed} files");

    let manifest_removed = clean_manifest(&plan.root.join(&config.manifest.path), &config.manifest)?;
    let pruned = prune(&plan.root, &config.prune.entries)?;

    Ok(SetupResult::new(
        plan,
        false,
        files_changed,
        replacements,
        manifest_removed,
        &pruned,
    ))
}

/// Plan and, unless `dry_run`, apply a full setup of the tree at `root`.
///
/// Returns the result and, for dry runs, a rendered preview of the plan.
pub fn setup_operation(
    root: &Path,
    name: &PluginName,
    config: &Config,
    dry_run: bool,
    use_color: bool,
) -> Result<(SetupResult, Option<String>)> {
    let plan = plan_setup(root, name, config)?;

    if dry_run {
        let would_prune = existing_entries(root, &config.prune.entries);
        let result = SetupResult::new(
            &plan,
            true,
            plan.edits.len(),
            plan.total_replacements(),
            None,
            &would_prune,
        );
        let preview = crate::preview::render_plan(&plan, &would_prune, use_color);
        return Ok((result, Some(preview)));
    }

    Ok((apply_setup(&plan, config)?, None))
}
