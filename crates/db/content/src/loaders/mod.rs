//! Content loaders for reading helper data from files.
//!
//! Loaders turn TOML config files and JSON database dumps into `db-core`
//! types. They exist for tooling and fixtures; at runtime the host hands its
//! live database to the API directly.

pub mod config;
pub mod database;

pub use config::ConfigLoader;
pub use database::DatabaseLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
