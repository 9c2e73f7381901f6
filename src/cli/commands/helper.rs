use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::config::{Config, ConfigLoadResult, load_config};
use crate::core::ignore::IgnoreRuleSet;
use crate::store::Store;

/// Configuration and paths shared by every store-backed command.
pub struct CommandContext {
    loaded: ConfigLoadResult,
    store_path: PathBuf,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        let loaded = load_config(&cwd)?;
        let store_path = match &common.store {
            Some(path) => cwd.join(path),
            None => loaded.resolve(&loaded.config.store_path),
        };
        debug!(
            from_file = loaded.from_file,
            store = %store_path.display(),
            "configuration loaded"
        );
        Ok(Self { loaded, store_path })
    }

    pub fn config(&self) -> &Config {
        &self.loaded.config
    }

    pub fn open_store(&self) -> Result<Store> {
        Store::open(&self.store_path).with_context(|| {
            format!(
                "Failed to open translation store at {}",
                self.store_path.display()
            )
        })
    }

    /// Load ignore rules from `override_path`, or from the configured file.
    pub fn ignore_rules(&self, override_path: Option<&Path>) -> Result<IgnoreRuleSet> {
        let path = match override_path {
            Some(path) => path.to_path_buf(),
            None => self.loaded.resolve(&self.config().ignore_file),
        };
        Ok(IgnoreRuleSet::load(&path, self.config().match_case())?)
    }

    pub fn bundles_root(&self) -> PathBuf {
        self.loaded.resolve(&self.config().bundles_root)
    }
}

/// "1 binding" / "2 bindings".
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
