//! The helper API context.

use db_core::{ApiConfig, Database};

use crate::ModRegistry;

/// Mutating helpers over a host database.
///
/// `SpaceApi` borrows the database exclusively for its lifetime, so every
/// operation sees the tables uncontended. Each operation performs all of its
/// lookups before its first write: a call that returns an error leaves the
/// database as it found it.
///
/// Operations are grouped by table in the `ops` modules:
/// items and handbook, locales, trader assortments, traders, slot filters,
/// bot loadouts and spawn points.
pub struct SpaceApi<'db> {
    pub(crate) db: &'db mut Database,
    pub(crate) config: ApiConfig,
    pub(crate) registry: Option<&'db ModRegistry>,
}

impl<'db> SpaceApi<'db> {
    /// Creates an API over `db` with default configuration and no mod
    /// registry.
    pub fn new(db: &'db mut Database) -> Self {
        Self {
            db,
            config: ApiConfig::default(),
            registry: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: &'db ModRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Read access to the underlying tables.
    pub fn database(&self) -> &Database {
        &*self.db
    }

    /// Whether the host reports `mod_name` as initialized.
    ///
    /// Without a registry every lookup answers `false`.
    pub fn is_mod_loaded(&self, mod_name: &str) -> bool {
        self.registry
            .is_some_and(|registry| registry.is_loaded(mod_name))
    }
}
