use std::path::PathBuf;
use thiserror::Error;

use crate::types::Language;

/// Errors that can occur when loading or checking a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read or write catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Entry #{0} has an empty title")]
    EmptyTitle(usize),

    #[error("Duplicate entry title '{0}'")]
    DuplicateTitle(String),

    #[error("Entry '{title}' has a {language} note but no {language} snippet")]
    OrphanNote { title: String, language: Language },

    #[error("{0}: {1}")]
    WithContext(String, Box<CatalogError>),
}

impl CatalogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File operation failed: {e}"),
            Self::NotFound(path) => format!("Catalog file not found at: {}", path.display()),
            Self::Parse(e) => format!("Catalog file is not valid TOML: {e}"),
            Self::Serialize(e) => format!("Could not write catalog as TOML: {e}"),
            Self::EmptyTitle(index) => {
                format!("Entry #{} needs a title", index + 1)
            }
            Self::DuplicateTitle(title) => {
                format!("The title '{title}' is used by more than one entry")
            }
            Self::OrphanNote { title, language } => format!(
                "Entry '{title}' has a {language} note but its {language} snippet is empty, so the note would never be shown"
            ),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Type alias for Result with CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
