use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::types::Language;
use crate::Catalog;

impl Catalog {
    /// Check the catalog for authoring defects, reporting the first one found.
    ///
    /// An entry must have a non-blank title, titles must be unique, and a
    /// per-language note needs a snippet in that language to be shown next to.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for (index, entry) in self.iter().enumerate() {
            let title = entry.title.trim();
            if title.is_empty() {
                return Err(CatalogError::EmptyTitle(index));
            }
            if !seen.insert(title) {
                return Err(CatalogError::DuplicateTitle(title.to_string()));
            }

            for language in Language::ALL {
                if entry.language_notes.get(language).is_some() && !entry.snippets.has(language) {
                    return Err(CatalogError::OrphanNote {
                        title: entry.title.clone(),
                        language,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Entry, Language, Snippets};
    use crate::{Catalog, CatalogError};

    #[test]
    fn test_blank_title_rejected() {
        let catalog = Catalog::new(vec![
            Entry::new("Booleans", Snippets::new("bool foo;", "boolean foo;")),
            Entry::new("   ", Snippets::none()),
        ]);
        match catalog.validate() {
            Err(CatalogError::EmptyTitle(index)) => assert_eq!(index, 1),
            other => panic!("expected EmptyTitle, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let catalog = Catalog::new(vec![
            Entry::new("Arrays", Snippets::none()),
            Entry::new("Arrays ", Snippets::none()),
        ]);
        match catalog.validate() {
            Err(CatalogError::DuplicateTitle(title)) => assert_eq!(title, "Arrays"),
            other => panic!("expected DuplicateTitle, got {other:?}"),
        }
    }

    #[test]
    fn test_note_without_snippet_rejected() {
        let catalog = Catalog::new(vec![Entry::new("Const-ness", Snippets::new("", "final int x = 7;"))
            .with_language_note(Language::Cpp, "use const")]);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::OrphanNote { language: Language::Cpp, .. }
        ));
        assert!(err.user_message().contains("C++ snippet is empty"));
    }
}
