//! Allow-lists of item ids.
//!
//! The host stores filters as plain JSON arrays. [`FilterSet`] keeps that wire
//! shape and insertion order but gives the list set semantics: an id appears
//! at most once, whether it arrived through [`FilterSet::insert`] or through
//! deserialization of a list that already contained duplicates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Ordered set of item ids permitted in a slot, grid, cartridge or chamber.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FilterSet {
    ids: Vec<String>,
}

impl FilterSet {
    /// Creates an empty filter.
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Adds `id` unless it is already present.
    ///
    /// Returns `true` when the id was newly inserted.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns `true` if `id` is part of the filter.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Removes `id`, returning whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for FilterSet {
    fn from(ids: Vec<String>) -> Self {
        let mut seen = HashSet::with_capacity(ids.len());
        let ids = ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        Self { ids }
    }
}

impl From<FilterSet> for Vec<String> {
    fn from(filter: FilterSet) -> Self {
        filter.ids
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut filter = FilterSet::new();
        for id in iter {
            filter.insert(id);
        }
        filter
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
