//! Static page renderer for the C++ vs Java comparison catalog
//!
//! Rendering happens in two steps. [`PageRenderer`] turns a [`catalog::Catalog`]
//! into a [`Page`], handing each snippet to a [`SnippetRenderer`]. An
//! [`OutputRenderer`] then writes the page as HTML or JSON. Both steps are pure;
//! the same catalog and configuration always give the same output.

pub mod config;
pub mod document;
pub mod error;
pub mod html;
pub mod renderers;
pub mod snippet;

pub use config::{PageConfig, Theme, DEFAULT_CONFIG_FILE};
pub use document::{Card, Page, PageRenderer, SnippetSection};
pub use error::{PageError, Result};
pub use renderers::{HtmlRenderer, JsonRenderer, OutputFormat, OutputRenderer};
pub use snippet::{CodeBlock, SnippetRenderer, SnippetRequest};

/// Render the configured catalog to a string in the given format
pub fn render_to_string(config: &PageConfig, format: OutputFormat) -> Result<String> {
    let catalog = config.resolve_catalog()?;
    let page = PageRenderer::new(config.clone()).render(&catalog);
    format.renderer(config.include_styles).render(&page)
}
