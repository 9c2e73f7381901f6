use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::{
    classify::{DEFAULT_NAME_PATTERNS, TextClassifier},
    utils::MatchCase,
};

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_store_path")]
    pub store_path: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
    #[serde(default)]
    pub ignore_case_sensitive: bool,
    #[serde(default = "default_bundles_root")]
    pub bundles_root: String,
    #[serde(default = "default_name_patterns")]
    pub default_name_patterns: Vec<String>,
}

fn default_store_path() -> String {
    "./.glossa/store".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_ignore_file() -> String {
    ".glossaignore".to_string()
}

fn default_bundles_root() -> String {
    "./translations".to_string()
}

fn default_name_patterns() -> Vec<String> {
    DEFAULT_NAME_PATTERNS.iter().map(|p| p.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            source_language: default_source_language(),
            ignore_file: default_ignore_file(),
            ignore_case_sensitive: false,
            bundles_root: default_bundles_root(),
            default_name_patterns: default_name_patterns(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any pattern in `defaultNamePatterns` is not a valid regex.
    pub fn validate(&self) -> Result<()> {
        self.classifier()?;
        if self.source_language.trim().is_empty() {
            anyhow::bail!("'sourceLanguage' must not be empty");
        }
        Ok(())
    }

    pub fn classifier(&self) -> Result<TextClassifier> {
        TextClassifier::with_patterns(&self.default_name_patterns)
            .context("Invalid regex in 'defaultNamePatterns'")
    }

    pub fn match_case(&self) -> MatchCase {
        MatchCase::from_sensitive(self.ignore_case_sensitive)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    /// Resolve a config path against the config file's directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
