use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors raised while configuring or writing out the page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),

    #[error("{0}: {1}")]
    WithContext(String, Box<PageError>),
}

impl PageError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File operation failed: {e}"),
            Self::ConfigParse(e) => format!("Configuration is not valid TOML: {e}"),
            Self::ConfigNotFound { path } => {
                format!("Configuration file not found at: {}", path.display())
            }
            Self::InvalidConfig { message } => format!("Invalid configuration: {message}"),
            Self::Json(e) => format!("Failed to produce JSON output: {e}"),
            Self::Catalog(e) => e.user_message(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
