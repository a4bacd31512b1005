use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::ManifestConfig;
use crate::error::SetupError;

/// Strip setup-only entries from the package manifest.
///
/// Removes the configured keys from `scripts` and `devDependencies` and
/// writes the file back with two-space indentation, keeping key order.
/// Returns the removed entries as `section.key`, or `None` when the
/// manifest does not exist.
pub fn clean_manifest(path: &Path, config: &ManifestConfig) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        tracing::warn!("no manifest at {}, skipping", path.display());
        return Ok(None);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut manifest: Value = serde_json::from_str(&content).map_err(|e| SetupError::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let Some(root) = manifest.as_object_mut() else {
        return Err(SetupError::Manifest {
            path: path.to_path_buf(),
            message: "top level is not an object".to_string(),
        }
        .into());
    };

    let mut removed = Vec::new();
    for (section, keys) in [
        ("scripts", &config.remove_scripts),
        ("devDependencies", &config.remove_dev_dependencies),
    ] {
        if let Some(table) = root.get_mut(section).and_then(Value::as_object_mut) {
            for key in keys {
                if table.shift_remove(key).is_some() {
                    removed.push(format!("{section}.{key}"));
                }
            }
        }
    }

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("cleaned {}: removed {:?}", path.display(), removed);
    Ok(Some(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PACKAGE_JSON: &str = r#"{
  "name": "custom-plugin",
  "version": "1.0.0",
  "scripts": {
    "start": "gulp",
    "setup": "node setup.mjs",
    "build": "gulp build"
  },
  "devDependencies": {
    "gulp": "^4.0.2",
    "ora": "^6.0.0",
    "prompts": "^2.4.2",
    "replace-in-file": "^6.3.5"
  }
}"#;

    #[test]
    fn test_removes_setup_entries_and_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, PACKAGE_JSON).unwrap();

        let removed = clean_manifest(&path, &ManifestConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(
            removed,
            vec![
                "scripts.setup",
                "devDependencies.prompts",
                "devDependencies.ora",
                "devDependencies.replace-in-file"
            ]
        );

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            r#"{
  "name": "custom-plugin",
  "version": "1.0.0",
  "scripts": {
    "start": "gulp",
    "build": "gulp build"
  },
  "devDependencies": {
    "gulp": "^4.0.2"
  }
}
"#
        );
    }

    #[test]
    fn test_missing_manifest_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        assert!(clean_manifest(&path, &ManifestConfig::default())
            .unwrap()
            .is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_sections_are_fine() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, r#"{"name": "x"}"#).unwrap();

        let removed = clean_manifest(&path, &ManifestConfig::default())
            .unwrap()
            .unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, "{ not json").unwrap();

        let err = clean_manifest(&path, &ManifestConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SetupError>(),
            Some(SetupError::Manifest { .. })
        ));
    }

    #[test]
    fn test_non_object_manifest_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, "[]").unwrap();
        assert!(clean_manifest(&path, &ManifestConfig::default()).is_err());
    }
}
