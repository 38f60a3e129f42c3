//! Shared fixtures for the integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// A two-entry catalog covering a shared note, a per-language note and a
/// notes-only entry
pub const SMALL_CATALOG: &str = r#"
[[entries]]
title = "Class Declarations"
notes = "Almost the same, but Java does not require a semicolon"

[entries.style]
icon = "receipt-refund"
tone = "rose"

[entries.snippets]
cpp = "class Bar {};"
java = "class Bar {}"

[[entries]]
title = "Scoping static methods and namespaces"

[entries.language_notes]
java = "All scoping in Java uses the . again"

[entries.snippets]
cpp = "MyClass::doStuff();"
java = "MyClass.doStuff();"

[[entries]]
title = "Comments"
notes = "Same in both languages (// and /* */ both work)"

[entries.snippets]
cpp = ""
java = ""
"#;

/// Write a config file pointing at a catalog file next to it, returning the config path
pub fn write_project(dir: &Path, config: &str, catalog: &str) -> std::io::Result<PathBuf> {
    let config_path = dir.join("cppjava.toml");
    fs::write(&config_path, config)?;
    fs::write(dir.join("catalog.toml"), catalog)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;
    use tempfile::TempDir;

    #[test]
    fn test_small_catalog_fixture_is_valid() {
        let catalog = Catalog::from_toml_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_write_project() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_project(temp_dir.path(), "catalog = \"catalog.toml\"", SMALL_CATALOG).unwrap();
        assert!(config_path.exists());
        assert!(temp_dir.path().join("catalog.toml").exists());
    }
}
