//! Output renderers for the page document
//!
//! The page is built once as a [`Page`] value and then written out in whichever
//! format was asked for.

use std::path::Path;

use crate::document::Page;
use crate::error::Result;

pub mod html;
pub mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

/// Writes a page in one specific format
pub trait OutputRenderer {
    fn render(&self, page: &Page) -> Result<String>;

    /// File extension this renderer produces
    fn extension(&self) -> &'static str;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    /// Pick the format from a file extension, defaulting to HTML
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("html")
            .to_lowercase();

        match extension.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Html,
        }
    }

    /// Renderer for this format. `include_styles` only affects HTML.
    pub fn renderer(&self, include_styles: bool) -> Box<dyn OutputRenderer> {
        match self {
            OutputFormat::Html if include_styles => Box::new(HtmlRenderer::new()),
            OutputFormat::Html => Box::new(HtmlRenderer::without_styles()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}
