//! Immutable, ordered catalog snapshot.

use std::collections::HashMap;

use crate::entry::CatalogEntry;
use crate::highlight::{fold_input, match_ranges};

/// An ordered set of entries keyed by code.
///
/// Built once and never mutated; a later fetch replaces the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build from entries in display order. Repeated codes keep their first entry.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Self::default();
        for entry in entries {
            if catalog.index.contains_key(&entry.code) {
                continue;
            }
            catalog
                .index
                .insert(entry.code.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }
        catalog
    }

    /// Entry for `code`, if present.
    pub fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.index.get(code).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose `"code: name"` label contains `input`, ignoring case.
    ///
    /// Blank input matches everything.
    pub fn search<'a>(&'a self, input: &str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        let needle = fold_input(input);
        self.entries.iter().filter(move |entry| {
            needle.is_empty() || !match_ranges(&entry.option_label(), &needle).is_empty()
        })
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
