//! Game configuration loader.

use std::path::Path;

use wordsearch_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(config.drag_threshold.is_finite() && config.drag_threshold >= 0.0) {
            anyhow::bail!(
                "drag_threshold must be a non-negative number, got {}",
                config.drag_threshold
            );
        }

        Ok(config)
    }
}
