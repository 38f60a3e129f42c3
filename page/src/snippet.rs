//! Code snippet display
//!
//! The page treats snippet display as a black box: it hands over the source
//! text, a language identifier and a few display options, and embeds whatever
//! markup comes back. [`CodeBlock`] is the default implementation.

use crate::config::{PageConfig, Theme};
use crate::html::escape_html;

/// What the page asks the snippet display to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetRequest<'a> {
    pub text: &'a str,
    pub language: &'a str,
    pub show_line_numbers: bool,
    pub starting_line_number: usize,
}

impl<'a> SnippetRequest<'a> {
    pub fn new(text: &'a str, language: &'a str) -> Self {
        Self {
            text,
            language,
            show_line_numbers: false,
            starting_line_number: 1,
        }
    }

    pub fn with_line_numbers(mut self, starting_line_number: usize) -> Self {
        self.show_line_numbers = true;
        self.starting_line_number = starting_line_number;
        self
    }
}

/// Turns a snippet into a read-only code display
pub trait SnippetRenderer {
    fn render_snippet(&self, request: &SnippetRequest<'_>) -> String;
}

/// Themed `<pre><code>` block with an optional line-number gutter and copy button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlock {
    pub theme: Theme,
    pub copy_button: bool,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            copy_button: true,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            theme: config.theme,
            copy_button: config.copy_button,
        }
    }

    fn code_body(request: &SnippetRequest<'_>) -> String {
        if !request.show_line_numbers {
            return escape_html(request.text);
        }

        request
            .text
            .lines()
            .enumerate()
            .map(|(offset, line)| {
                format!(
                    r#"<span class="line"><span class="line-number">{}</span>{}</span>"#,
                    request.starting_line_number + offset,
                    escape_html(line)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CodeBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetRenderer for CodeBlock {
    fn render_snippet(&self, request: &SnippetRequest<'_>) -> String {
        let language = escape_html(request.language);
        let copy_button = if self.copy_button {
            format!(
                r#"<button class="copy-button" type="button" data-copy="{}" aria-label="Copy code">Copy</button>"#,
                escape_html(request.text)
            )
        } else {
            String::new()
        };
        let numbered = if request.show_line_numbers { " code-block--numbered" } else { "" };

        format!(
            r#"<div class="code-block {theme}{numbered}" data-language="{language}">{copy_button}<pre><code class="language-{language}">{body}</code></pre></div>"#,
            theme = self.theme.class_name(),
            body = Self::code_body(request),
        )
    }
}
