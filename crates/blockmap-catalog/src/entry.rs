//! Catalog entries
//!
//! A [`Catalog`] is the declarative table of block names and component
//! handles the registry is built from. Order matters: later entries win
//! alias collisions under the default policy.

use serde::{Deserialize, Serialize};

/// One content-block type known to the CMS
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Authoring-side block name, e.g. `hero_teaser`
    pub name: String,

    /// Component the block renders with, e.g. `HeroTeaser`
    pub handle: String,
}

impl CatalogEntry {
    /// Create new entry
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
        }
    }
}

/// Ordered list of catalog entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a static `(name, handle)` table
    #[must_use]
    pub fn from_table(table: &[(&str, &str)]) -> Self {
        table
            .iter()
            .map(|(name, handle)| CatalogEntry::new(*name, *handle))
            .collect()
    }

    /// Append entry
    #[inline]
    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// With entry appended
    #[inline]
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, handle: impl Into<String>) -> Self {
        self.push(CatalogEntry::new(name, handle));
        self
    }

    /// Entries in catalog order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Owned `(name, handle)` pairs, ready for `register_catalog`
    pub fn pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.name.clone(), entry.handle.clone()))
    }

    /// Find entry by canonical name (last one wins, like registration)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().rev().find(|entry| entry.name == name)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<CatalogEntry> for Catalog {
    fn extend<I: IntoIterator<Item = CatalogEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
