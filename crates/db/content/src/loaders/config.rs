//! Helper API configuration loader.

use std::path::Path;

use db_core::ApiConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`ApiConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing ApiConfig
    pub fn load(path: &Path) -> LoadResult<ApiConfig> {
        let content = read_file(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse config data from TOML text. Omitted keys keep their defaults.
    pub fn from_toml_str(content: &str) -> LoadResult<ApiConfig> {
        let config: ApiConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.loadout.max_depth == 0 {
            anyhow::bail!("loadout.max_depth must be at least 1");
        }

        Ok(config)
    }

    /// The defaults bundled with the crate.
    pub fn embedded() -> LoadResult<ApiConfig> {
        Self::from_toml_str(include_str!("../../data/config/default.toml"))
    }
}
