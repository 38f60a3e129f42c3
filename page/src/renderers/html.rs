//! HTML renderer producing the self-contained comparison page

use catalog::Icon;

use super::OutputRenderer;
use crate::document::{Card, Page, SnippetSection};
use crate::error::Result;
use crate::html::escape_html;

/// HTML renderer that produces a complete, standalone document
pub struct HtmlRenderer {
    /// Whether to embed the stylesheet
    pub include_styles: bool,
}

impl HtmlRenderer {
    /// Create a new HTML renderer with CSS styles
    pub fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Create an HTML renderer without CSS styles
    pub fn without_styles() -> Self {
        Self {
            include_styles: false,
        }
    }

    fn styles(&self) -> String {
        if self.include_styles {
            format!("<style>\n{}</style>", include_str!("../../templates/page_styles.css"))
        } else {
            String::new()
        }
    }

    fn embedded_javascript() -> &'static str {
        r#"document.querySelectorAll('.copy-button').forEach(function (button) {
    button.addEventListener('click', function () {
        navigator.clipboard.writeText(button.dataset.copy).then(function () {
            button.textContent = 'Copied';
            setTimeout(function () { button.textContent = 'Copy'; }, 1500);
        });
    });
});"#
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for HtmlRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let cards: String = page.cards.iter().map(format_card).collect();

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <link rel="icon" href="/favicon.ico">
    {styles}
</head>
<body>
    <div class="page">
        <div class="banner" role="banner">{banner}</div>
        <header class="page-header">
            <div class="container">
                <h1>{heading}</h1>
            </div>
        </header>
        <main class="container">
            <ol class="cards">
{cards}            </ol>
        </main>
        <footer class="page-footer">
            <div class="container">{title}</div>
        </footer>
    </div>
    <script>{script}</script>
</body>
</html>
"#,
            title = escape_html(&page.title),
            description = escape_html(&page.description),
            styles = self.styles(),
            banner = escape_html(&page.banner),
            heading = escape_html(&page.heading),
            script = Self::embedded_javascript(),
        ))
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

/// Generate one `<li>` card
fn format_card(card: &Card) -> String {
    let notes = match &card.notes {
        Some(notes) => format!(
            "\n                    <p class=\"card-notes\">{}</p>",
            escape_html(notes)
        ),
        None => String::new(),
    };
    let sections: String = card.sections.iter().map(format_section).collect();

    format!(
        r#"                <li class="card">
                    <div class="card-heading">
                        <span class="icon-badge tone-{tone}" data-icon="{icon}" aria-hidden="true">{glyph}</span>
                        <h2 class="card-title">{title}</h2>
                    </div>{notes}{sections}
                </li>
"#,
        tone = card.tone.name(),
        icon = card.icon.name(),
        glyph = icon_glyph(card.icon),
        title = escape_html(&card.title),
    )
}

/// Generate the labeled snippet section for one language
fn format_section(section: &SnippetSection) -> String {
    let note = match &section.note {
        Some(note) => format!(r#"<p class="snippet-note">{}</p>"#, escape_html(note)),
        None => String::new(),
    };

    format!(
        r#"
                    <section class="snippet snippet--{language}">
                        <h3 class="snippet-label">{label}</h3>{note}
                        {markup}
                    </section>"#,
        language = section.language.identifier(),
        label = escape_html(&section.label),
        markup = section.markup,
    )
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Clock => "🕒",
        Icon::Users => "👥",
        Icon::Cash => "💵",
        Icon::ReceiptRefund => "🧾",
        Icon::AcademicCap => "🎓",
    }
}
