//! Content catalog for the C++ vs Java comparison page
//!
//! A catalog is an ordered, read-only list of [`Entry`] values. Order is display
//! order. The built-in catalog is available through [`Catalog::builtin`]; other
//! catalogs can be read from TOML files with [`Catalog::load`].

pub mod error;
pub mod types;

mod entries;
mod loader;
mod validator;

use serde::{Deserialize, Serialize};

pub use error::{CatalogError, Result};
pub use types::{Entry, Icon, Language, LanguageNotes, Snippets, Style, Tone};

/// Ordered collection of comparison entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    entries: Vec<Entry>,
}

impl Catalog {
    /// Build a catalog from entries in display order. Does not validate.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The built-in C++ vs Java catalog
    pub fn builtin() -> &'static Catalog {
        &entries::BUILTIN
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its exact title
    pub fn get(&self, title: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.title == title)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_title() {
        let catalog = Catalog::builtin();
        let entry = catalog.get("Class Declarations").unwrap();
        assert_eq!(entry.snippets.cpp, "class Bar {};");
        assert_eq!(entry.snippets.java, "class Bar {}");
        assert!(catalog.get("Generics").is_none());
    }

    #[test]
    fn test_iteration_matches_entries() {
        let catalog = Catalog::builtin();
        let via_iter: Vec<_> = catalog.into_iter().map(|e| &e.title).collect();
        let via_slice: Vec<_> = catalog.entries().iter().map(|e| &e.title).collect();
        assert_eq!(via_iter, via_slice);
        assert_eq!(catalog.len(), via_slice.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.validate().is_ok());
    }
}
