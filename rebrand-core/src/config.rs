use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".rebrand.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Name the boilerplate ships with; its five spellings are the placeholder tokens
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Leading words that are uppercased whole ("wp" -> "WP")
    #[serde(default = "default_uppercase_prefixes")]
    pub uppercase_prefixes: Vec<String>,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub prune: PruneConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Path fragments; an entry is touched only if its relative path contains one
    #[serde(default = "default_allow")]
    pub allow: Vec<String>,

    /// Glob patterns skipped even when allow-listed
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: String,

    #[serde(default = "default_remove_scripts")]
    pub remove_scripts: Vec<String>,

    #[serde(default = "default_remove_dev_dependencies")]
    pub remove_dev_dependencies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PruneConfig {
    /// Setup-only files and directories removed after a successful run
    #[serde(default = "default_prune_entries")]
    pub entries: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            uppercase_prefixes: default_uppercase_prefixes(),
            scan: ScanConfig::default(),
            manifest: ManifestConfig::default(),
            prune: PruneConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            allow: default_allow(),
            exclude: default_exclude(),
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
            remove_scripts: default_remove_scripts(),
            remove_dev_dependencies: default_remove_dev_dependencies(),
        }
    }
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            entries: default_prune_entries(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_placeholder() -> String {
    "Custom Plugin".to_string()
}

fn default_uppercase_prefixes() -> Vec<String> {
    strings(crate::case_model::DEFAULT_UPPERCASE_PREFIXES)
}

fn default_allow() -> Vec<String> {
    strings(&[
        "custom-plugin",
        "gulpfile.mjs",
        "includes",
        "languages",
        "package.json",
        "phpcs.xml",
    ])
}

fn default_exclude() -> Vec<String> {
    strings(&["node_modules", "vendor"])
}

fn default_manifest_path() -> String {
    "package.json".to_string()
}

fn default_remove_scripts() -> Vec<String> {
    strings(&["setup"])
}

fn default_remove_dev_dependencies() -> Vec<String> {
    strings(&["prompts", "ora", "replace-in-file"])
}

fn default_prune_entries() -> Vec<String> {
    strings(&["setup.mjs", ".git", "README.md"])
}

impl Config {
    /// Load `.rebrand.toml` from `root` if it exists, defaults otherwise
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.placeholder, "Custom Plugin");
        assert_eq!(config.uppercase_prefixes, vec!["wp", "wc"]);
        assert_eq!(config.scan.allow.len(), 6);
        assert!(config.scan.allow.contains(&"includes".to_string()));
        assert_eq!(config.manifest.path, "package.json");
        assert_eq!(config.prune.entries, vec!["setup.mjs", ".git", "README.md"]);
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.placeholder, "Custom Plugin");
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "placeholder = \"Starter Theme\"\n\n[prune]\nentries = [\"bootstrap.sh\"]\n",
        )
        .unwrap();

        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.placeholder, "Starter Theme");
        assert_eq!(loaded.prune.entries, vec!["bootstrap.sh"]);
        assert_eq!(loaded.scan.allow, Config::default().scan.allow);
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
placeholder = "Acme Kit"

[scan]
allow = ["acme-kit", "src"]
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.placeholder, "Acme Kit");
        assert_eq!(config.scan.allow, vec!["acme-kit", "src"]);
        // Unset fields keep their defaults
        assert_eq!(config.scan.exclude, vec!["node_modules", "vendor"]);
        assert_eq!(config.manifest.remove_scripts, vec!["setup"]);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "placeholder = [").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }
}
