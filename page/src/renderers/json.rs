//! JSON renderer for structured output

use super::OutputRenderer;
use crate::document::Page;
use crate::error::Result;

/// JSON renderer that writes the page structure
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(page)?
        } else {
            serde_json::to_string(page)?
        };
        Ok(json)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
