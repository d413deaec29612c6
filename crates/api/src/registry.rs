//! Registry of extensions the host has already initialized.

use std::collections::HashSet;

/// Names of loaded mods, populated by the host's mod loader.
#[derive(Clone, Debug, Default)]
pub struct ModRegistry {
    loaded: HashSet<String>,
}

impl ModRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` as loaded. Returns `false` if it was already present.
    pub fn mark_loaded(&mut self, name: impl Into<String>) -> bool {
        self.loaded.insert(name.into())
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ModRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            loaded: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        let mut registry: ModRegistry = ["SpacemanTraders"].into_iter().collect();
        assert!(registry.is_loaded("SpacemanTraders"));
        assert!(!registry.is_loaded("spacemantraders"));

        assert!(registry.mark_loaded("MoreAmmo"));
        assert!(!registry.mark_loaded("MoreAmmo"));
        assert_eq!(registry.len(), 2);
    }
}
