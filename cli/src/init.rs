use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use catalog::Catalog;
use page::config::generate_default_config_template;
use std::fs;
use std::path::Path;

pub fn execute(config: String, catalog: Option<String>, force: bool) -> Result<()> {
    ui::section_header("Page Configuration Setup");

    let config_path = Path::new(&config);
    ensure_writable(config_path, force)?;
    fs::write(config_path, generate_default_config_template())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    ui::success_message(&format!("Created {}", config_path.display()));

    if let Some(catalog) = catalog {
        let catalog_path = Path::new(&catalog);
        ensure_writable(catalog_path, force)?;
        Catalog::builtin()
            .save(catalog_path)
            .with_context(|| format!("Failed to write {}", catalog_path.display()))?;
        ui::success_message(&format!(
            "Wrote {} built-in entries to {}",
            Catalog::builtin().len(),
            catalog_path.display()
        ));
        ui::info_message(&format!(
            "Set catalog = \"{}\" in {} to render it",
            catalog,
            config_path.display()
        ));
    }

    ui::info_message(&format!("Edit {} to customise the page", config_path.display()));
    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()));
    }
    if path.exists() {
        ui::warning_message(&format!("Overwriting {}", path.display()));
    }
    Ok(())
}
