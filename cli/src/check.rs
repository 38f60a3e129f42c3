use crate::error::{Result, ResultExt};
use crate::settings;
use crate::ui;
use catalog::Language;

pub fn execute(config: Option<String>, verbose: bool) -> Result<()> {
    let config = settings::load_config(config.as_deref())?;
    ui::status_message(&format!("Checking {}", settings::catalog_source(&config)));

    let catalog = config
        .resolve_catalog()
        .with_context(|| "Could not load catalog")?;
    catalog
        .validate()
        .with_context(|| format!("Problem in {}", settings::catalog_source(&config)))?;

    if verbose {
        for (index, entry) in catalog.iter().enumerate() {
            let snippets = Language::ALL
                .iter()
                .filter(|language| entry.snippets.has(**language))
                .count();
            ui::entry_line(
                index + 1,
                &entry.title,
                &format!("({} snippets, {} icon)", snippets, entry.style.icon.name()),
            );
        }
    }

    if catalog.is_empty() {
        ui::warning_message("Catalog has no entries; the page will be empty");
    }
    ui::success_message(&format!("Catalog is valid: {} entries", catalog.len()));

    Ok(())
}
