//! Data-driven configuration and database loaders.
//!
//! This crate reads the files that surround the helper API:
//! - API configuration (TOML, with bundled defaults)
//! - Database snapshots (JSON) for tooling and test fixtures
//!
//! All loaders produce `db-core` types directly.

pub mod loaders;

pub use loaders::{ConfigLoader, DatabaseLoader, LoadResult};
