//! Page configuration loaded from `cppjava.toml`

use catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PageError, Result};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "cppjava.toml";

pub const DEFAULT_TITLE: &str = "Rick King's C++ vs Java";
pub const DEFAULT_BANNER: &str = "C++ vs Java - Object Oriented Programming with Rick King";
pub const DEFAULT_HEADING: &str = "Examples";

/// Colour theme applied to code blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dracula,
    Light,
}

impl Theme {
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Dracula => "theme-dracula",
            Theme::Light => "theme-light",
        }
    }
}

/// Everything that can be tuned about the generated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub description: String,
    pub banner: String,
    pub heading: String,
    pub theme: Theme,
    pub show_line_numbers: bool,
    pub starting_line_number: usize,
    pub include_styles: bool,
    pub copy_button: bool,
    /// TOML catalog replacing the built-in one. Relative paths resolve against
    /// the directory of the configuration file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    #[serde(skip)]
    pub(crate) base_dir: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_TITLE.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            theme: Theme::Dracula,
            show_line_numbers: false,
            starting_line_number: 1,
            include_styles: true,
            copy_button: true,
            catalog: None,
            base_dir: None,
        }
    }
}

impl PageConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PageConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, failing if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(PageError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path_ref)?;
        let mut config = Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path_ref.display())))?;
        config.base_dir = path_ref.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.starting_line_number == 0 {
            return Err(PageError::invalid_config(
                "starting_line_number must be 1 or greater",
            ));
        }
        if self.title.trim().is_empty() {
            return Err(PageError::invalid_config("title must not be empty"));
        }
        Ok(())
    }

    /// Path of the configured catalog file, resolved against the config file location
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_ref().map(|path| match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.clone(),
        })
    }

    /// The catalog this configuration renders: a configured file, or the built-in one
    pub fn resolve_catalog(&self) -> Result<Cow<'static, Catalog>> {
        match self.catalog_path() {
            Some(path) => Ok(Cow::Owned(Catalog::load(path)?)),
            None => Ok(Cow::Borrowed(Catalog::builtin())),
        }
    }
}

/// Generate the commented default `cppjava.toml`
pub fn generate_default_config_template() -> String {
    format!(
        r#"# C++ vs Java page configuration
# Every key is optional; the values below are the defaults.

# Document <title> and meta description
title = "{title}"
description = "{title}"

# Banner across the top of the page and the page heading
banner = "{banner}"
heading = "{heading}"

# Code block appearance: "dracula" or "light"
theme = "dracula"
show_line_numbers = false
starting_line_number = 1
copy_button = true

# Embed the stylesheet in the generated document
include_styles = true

# Render a catalog file instead of the built-in entries
# (generate one with `cppjava init --catalog catalog.toml`)
# catalog = "catalog.toml"
"#,
        title = DEFAULT_TITLE,
        banner = DEFAULT_BANNER,
        heading = DEFAULT_HEADING,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_matches_defaults() {
        let config = PageConfig::from_toml_str(&generate_default_config_template()).unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = PageConfig::from_toml_str("show_line_numbers = true\ntheme = \"light\"").unwrap();
        assert!(config.show_line_numbers);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.starting_line_number, 1);
    }

    #[test]
    fn test_zero_starting_line_rejected() {
        let err = PageConfig::from_toml_str("starting_line_number = 0").unwrap_err();
        assert!(matches!(err, PageError::InvalidConfig { .. }));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let err = PageConfig::from_toml_str("theme = \"solarized\"").unwrap_err();
        assert!(matches!(err, PageError::ConfigParse(_)));
    }

    #[test]
    fn test_misspelled_key_rejected() {
        let err = PageConfig::from_toml_str("show_line_number = true").unwrap_err();
        assert!(matches!(err, PageError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

        assert!(matches!(
            PageConfig::load(&path),
            Err(PageError::ConfigNotFound { .. })
        ));
        assert_eq!(PageConfig::load_or_default(&path).unwrap(), PageConfig::default());
    }

    #[test]
    fn test_relative_catalog_resolves_next_to_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "catalog = \"entries.toml\"").unwrap();

        let config = PageConfig::load(&path).unwrap();
        assert_eq!(config.catalog_path(), Some(temp_dir.path().join("entries.toml")));
    }

    #[test]
    fn test_builtin_catalog_without_setting() {
        let catalog = PageConfig::default().resolve_catalog().unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
        assert_eq!(catalog.entries()[0].title, "Main Function");
    }
}
