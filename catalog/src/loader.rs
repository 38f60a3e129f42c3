use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::Catalog;

impl Catalog {
    /// Parse and validate a catalog from TOML text
    ///
    /// ```toml
    /// [[entries]]
    /// title = "Booleans"
    /// notes = "Java is a bit more verbose"
    ///
    /// [entries.snippets]
    /// cpp = "bool foo;"
    /// java = "boolean foo;"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and validate a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Invalid catalog {}", path.display())))
    }

    /// Serialize the catalog in the same format accepted by [`Catalog::load`]
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Write the catalog as TOML to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
