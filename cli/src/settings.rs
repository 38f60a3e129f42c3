use crate::error::{Result, ResultExt};
use page::{PageConfig, DEFAULT_CONFIG_FILE};

/// Load the page configuration for a command.
///
/// An explicit path must exist. Without one, `cppjava.toml` in the current
/// directory is used when present and the defaults otherwise.
pub fn load_config(path: Option<&str>) -> Result<PageConfig> {
    match path {
        Some(path) => PageConfig::load(path).with_context(|| "Could not load configuration"),
        None => PageConfig::load_or_default(DEFAULT_CONFIG_FILE)
            .with_context(|| "Could not load configuration"),
    }
}

/// Describe where the catalog comes from, for verbose output
pub fn catalog_source(config: &PageConfig) -> String {
    match config.catalog_path() {
        Some(path) => format!("catalog file {}", path.display()),
        None => "built-in catalog".to_string(),
    }
}
