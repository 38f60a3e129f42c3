//! Page document model and the renderer that builds it from a catalog

use catalog::{Catalog, Entry, Icon, Language, Tone};
use serde::Serialize;

use crate::config::PageConfig;
use crate::snippet::{CodeBlock, SnippetRenderer, SnippetRequest};

/// The whole page, ready to be written out by an output renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: String,
    pub description: String,
    pub banner: String,
    pub heading: String,
    pub cards: Vec<Card>,
}

/// One catalog entry as shown on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub icon: Icon,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub sections: Vec<SnippetSection>,
}

/// A labeled code snippet for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetSection {
    pub language: Language,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub source: String,
    /// Markup produced by the snippet display
    pub markup: String,
}

/// Builds a [`Page`] from a catalog, delegating code display to a [`SnippetRenderer`]
pub struct PageRenderer<S = CodeBlock> {
    config: PageConfig,
    snippets: S,
}

impl PageRenderer<CodeBlock> {
    /// Renderer using the default code block, themed from the configuration
    pub fn new(config: PageConfig) -> Self {
        let snippets = CodeBlock::from_config(&config);
        Self { config, snippets }
    }
}

impl<S: SnippetRenderer> PageRenderer<S> {
    pub fn with_snippet_renderer(config: PageConfig, snippets: S) -> Self {
        Self { config, snippets }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Render every entry into a card, in catalog order
    pub fn render(&self, catalog: &Catalog) -> Page {
        Page {
            title: self.config.title.clone(),
            description: self.config.description.clone(),
            banner: self.config.banner.clone(),
            heading: self.config.heading.clone(),
            cards: catalog.iter().map(|entry| self.card(entry)).collect(),
        }
    }

    fn card(&self, entry: &Entry) -> Card {
        // Languages without source text get no section at all
        let sections = entry
            .snippets
            .iter()
            .filter(|(_, source)| !source.is_empty())
            .map(|(language, source)| self.section(entry, language, source))
            .collect();

        Card {
            title: entry.title.clone(),
            icon: entry.style.icon,
            tone: entry.style.tone,
            notes: non_blank(entry.notes.as_deref()),
            sections,
        }
    }

    fn section(&self, entry: &Entry, language: Language, source: &str) -> SnippetSection {
        let mut request = SnippetRequest::new(source, language.identifier());
        if self.config.show_line_numbers {
            request = request.with_line_numbers(self.config.starting_line_number);
        }

        SnippetSection {
            language,
            label: language.label().to_string(),
            note: non_blank(entry.language_notes.get(language)),
            source: source.to_string(),
            markup: self.snippets.render_snippet(&request),
        }
    }
}

/// Blank notes render like missing ones
fn non_blank(note: Option<&str>) -> Option<String> {
    note.filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Snippets;

    /// Records what was asked for instead of producing markup
    struct Plain;

    impl SnippetRenderer for Plain {
        fn render_snippet(&self, request: &SnippetRequest<'_>) -> String {
            format!(
                "{}:{}:{}:{}",
                request.language, request.show_line_numbers, request.starting_line_number, request.text
            )
        }
    }

    fn plain_renderer(config: PageConfig) -> PageRenderer<Plain> {
        PageRenderer::with_snippet_renderer(config, Plain)
    }

    #[test]
    fn test_one_card_per_entry_in_order() {
        let catalog = Catalog::builtin();
        let page = plain_renderer(PageConfig::default()).render(catalog);

        let card_titles: Vec<_> = page.cards.iter().map(|c| c.title.as_str()).collect();
        let entry_titles: Vec<_> = catalog.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(card_titles, entry_titles);
        assert_eq!(card_titles.first(), Some(&"Main Function"));
        assert_eq!(card_titles.last(), Some(&"Collections and Iteration"));
    }

    #[test]
    fn test_class_declarations_card() {
        let page = plain_renderer(PageConfig::default()).render(Catalog::builtin());
        let card = page
            .cards
            .iter()
            .find(|c| c.title == "Class Declarations")
            .unwrap();

        assert_eq!(
            card.notes.as_deref(),
            Some("Almost the same, but Java does not require a semicolon")
        );
        assert_eq!(card.sections.len(), 2);
        assert_eq!(card.sections[0].label, "C++");
        assert_eq!(card.sections[0].markup, "cpp:false:1:class Bar {};");
        assert_eq!(card.sections[1].label, "Java");
        assert_eq!(card.sections[1].markup, "java:false:1:class Bar {}");
    }

    #[test]
    fn test_empty_snippets_have_no_section() {
        let page = plain_renderer(PageConfig::default()).render(Catalog::builtin());

        let comments = page.cards.iter().find(|c| c.title == "Comments").unwrap();
        assert!(comments.sections.is_empty());
        assert!(comments.notes.is_some());

        let statics = page
            .cards
            .iter()
            .find(|c| c.title == "Static member functions and variables")
            .unwrap();
        let languages: Vec<_> = statics.sections.iter().map(|s| s.language).collect();
        assert_eq!(languages, vec![Language::Java]);
    }

    #[test]
    fn test_language_notes_attach_to_sections() {
        let catalog = Catalog::new(vec![Entry::new("Scoping", Snippets::new("A::b();", "A.b();"))
            .with_language_note(Language::Java, "uses a dot")]);
        let page = plain_renderer(PageConfig::default()).render(&catalog);

        let card = &page.cards[0];
        assert_eq!(card.notes, None);
        assert_eq!(card.sections[0].note, None);
        assert_eq!(card.sections[1].note.as_deref(), Some("uses a dot"));
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let catalog = Catalog::new(vec![Entry::new("Booleans", Snippets::new("bool foo;", ""))
            .with_notes("")
            .with_language_note(Language::Cpp, "  ")]);
        let page = plain_renderer(PageConfig::default()).render(&catalog);

        let card = &page.cards[0];
        assert_eq!(card.notes, None);
        assert_eq!(card.sections[0].note, None);
    }

    #[test]
    fn test_line_number_options_are_forwarded() {
        let config = PageConfig {
            show_line_numbers: true,
            starting_line_number: 10,
            ..PageConfig::default()
        };
        let catalog = Catalog::new(vec![Entry::new("Booleans", Snippets::new("bool foo;", ""))]);
        let page = plain_renderer(config).render(&catalog);

        assert_eq!(page.cards[0].sections[0].markup, "cpp:true:10:bool foo;");
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = PageRenderer::new(PageConfig::default());
        assert_eq!(
            renderer.render(Catalog::builtin()),
            renderer.render(Catalog::builtin())
        );
    }
}
