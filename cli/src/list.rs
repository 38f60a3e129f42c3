use crate::error::{Result, ResultExt};
use crate::settings;
use crate::ui;
use catalog::{Entry, Language};

pub fn execute(config: Option<String>) -> Result<()> {
    let config = settings::load_config(config.as_deref())?;
    let catalog = config
        .resolve_catalog()
        .with_context(|| "Could not load catalog")?;

    ui::section_header(&format!("{} ({} entries)", config.heading, catalog.len()));
    for (index, entry) in catalog.iter().enumerate() {
        ui::entry_line(index + 1, &entry.title, &summary(entry));
    }

    Ok(())
}

/// Languages that have a snippet, or a marker for notes-only entries
fn summary(entry: &Entry) -> String {
    let languages: Vec<_> = Language::ALL
        .iter()
        .filter(|language| entry.snippets.has(**language))
        .map(|language| language.label())
        .collect();

    if languages.is_empty() {
        "(notes only)".to_string()
    } else {
        format!("[{}]", languages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_entry_summaries() {
        let catalog = Catalog::builtin();
        assert_eq!(summary(catalog.get("Class Declarations").unwrap()), "[C++, Java]");
        assert_eq!(summary(catalog.get("Comments").unwrap()), "(notes only)");
        assert_eq!(
            summary(catalog.get("Static member functions and variables").unwrap()),
            "[Java]"
        );
    }
}
