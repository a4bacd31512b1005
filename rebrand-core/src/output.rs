use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::case_model::Variants;
use crate::operations::SetupPlan;
use crate::rename::RenameKind;
use crate::scanner::relative_key;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// A path rename, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedPath {
    pub from: String,
    pub to: String,
    pub kind: RenameKind,
}

/// Result of a setup run (or dry run)
#[derive(Debug, Serialize, Deserialize)]
pub struct SetupResult {
    pub name: String,
    pub variants: Variants,
    pub dry_run: bool,
    pub files_scanned: usize,
    pub files_changed: usize,
    pub replacements: usize,
    pub renames: Vec<RenamedPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_removed: Option<Vec<String>>,
    pub pruned: Vec<String>,
}

impl SetupResult {
    pub fn new(
        plan: &SetupPlan,
        dry_run: bool,
        files_changed: usize,
        replacements: usize,
        manifest_removed: Option<Vec<String>>,
        pruned: &[PathBuf],
    ) -> Self {
        let root = plan.root.as_path();
        Self {
            name: plan.variants.title.clone(),
            variants: plan.variants.clone(),
            dry_run,
            files_scanned: plan.files.len(),
            files_changed,
            replacements,
            renames: plan
                .renames
                .iter()
                .map(|r| RenamedPath {
                    from: relative_key(root, &r.path),
                    to: relative_key(root, &r.new_path),
                    kind: r.kind,
                })
                .collect(),
            manifest_removed,
            pruned: pruned.iter().map(|p| relative_key(root, p)).collect(),
        }
    }
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for SetupResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "setup",
            "dry_run": self.dry_run,
            "name": self.name,
            "variants": self.variants,
            "summary": {
                "files_scanned": self.files_scanned,
                "files_changed": self.files_changed,
                "replacements": self.replacements,
                "renames": self.renames.len(),
            },
            "renames": self.renames,
            "manifest_removed": self.manifest_removed,
            "pruned": self.pruned,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(output, "Dry run for '{}', nothing was changed", self.name).unwrap();
        } else {
            writeln!(output, "Set up '{}'", self.name).unwrap();
        }

        for (style, value) in self.variants.iter() {
            writeln!(output, "  {:<9} {}", style.to_string(), value).unwrap();
        }

        let (renamed, applied, removed) = if self.dry_run {
            ("Would rename", "Would apply", "Would remove")
        } else {
            ("✓ Renamed", "✓ Applied", "✓ Removed")
        };

        if !self.renames.is_empty() {
            writeln!(output, "{} {} paths", renamed, self.renames.len()).unwrap();
        }

        writeln!(
            output,
            "{} {} replacements across {} files",
            applied, self.replacements, self.files_changed
        )
        .unwrap();

        if let Some(ref removed_entries) = self.manifest_removed {
            if !removed_entries.is_empty() {
                writeln!(
                    output,
                    "✓ Cleaned manifest: removed {}",
                    removed_entries.join(", ")
                )
                .unwrap();
            }
        }

        if !self.pruned.is_empty() {
            writeln!(output, "{} {}", removed, self.pruned.join(", ")).unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// Display `path` relative to `root` when it lives under it.
pub fn display_path(root: &Path, path: &Path) -> String {
    if path.starts_with(root) {
        relative_key(root, path)
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_model::PluginName;

    fn sample(dry_run: bool) -> SetupResult {
        SetupResult {
            name: "WP Bulk Uploader".to_string(),
            variants: Variants::derive(&PluginName::parse("WP Bulk Uploader").unwrap()),
            dry_run,
            files_scanned: 4,
            files_changed: 3,
            replacements: 12,
            renames: vec![RenamedPath {
                from: "custom-plugin.php".to_string(),
                to: "wp-bulk-uploader.php".to_string(),
                kind: RenameKind::File,
            }],
            manifest_removed: Some(vec!["scripts.setup".to_string()]),
            pruned: vec!["setup.mjs".to_string(), ".git".to_string()],
        }
    }

    #[test]
    fn test_summary_output() {
        let summary = sample(false).format(OutputFormat::Summary);
        assert!(summary.starts_with("Set up 'WP Bulk Uploader'\n"));
        assert!(summary.contains("  constant  WP_BULK_UPLOADER\n"));
        assert!(summary.contains("✓ Renamed 1 paths\n"));
        assert!(summary.contains("✓ Applied 12 replacements across 3 files\n"));
        assert!(summary.contains("✓ Cleaned manifest: removed scripts.setup\n"));
        assert!(summary.contains("✓ Removed setup.mjs, .git\n"));
    }

    #[test]
    fn test_dry_run_summary() {
        let summary = sample(true).format(OutputFormat::Summary);
        assert!(summary.starts_with("Dry run for 'WP Bulk Uploader', nothing was changed\n"));
        assert!(summary.contains("Would rename 1 paths\n"));
        assert!(summary.contains("Would remove setup.mjs, .git\n"));
    }

    #[test]
    fn test_json_output() {
        let json = sample(false).format(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["operation"], "setup");
        assert_eq!(value["variants"]["domain"], "wp-bulk-uploader");
        assert_eq!(value["summary"]["replacements"], 12);
        assert_eq!(value["renames"][0]["kind"], "file");
        assert_eq!(value["pruned"][1], ".git");
    }

    #[test]
    fn test_version_output() {
        let version = VersionResult {
            name: "rebrand".to_string(),
            version: "0.1.0".to_string(),
        };
        assert_eq!(version.format(OutputFormat::Summary), "rebrand 0.1.0");
        assert_eq!(
            version.format(OutputFormat::Json),
            r#"{"name":"rebrand","version":"0.1.0"}"#
        );
    }

    #[test]
    fn test_display_path() {
        let root = Path::new("/p");
        assert_eq!(display_path(root, Path::new("/p/includes/a.php")), "includes/a.php");
        assert_eq!(display_path(root, Path::new("/other/a.php")), "/other/a.php");
    }
}
