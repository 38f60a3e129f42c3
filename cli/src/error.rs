use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page error: {0}")]
    Page(#[from] page::PageError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),

    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Page(err) => err.user_message(),
            Self::Catalog(err) => err.user_message(),
            Self::AlreadyExists(path) => format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_chains_user_messages() {
        let err: Result<()> = Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
            .with_context(|| "Failed to write index.html");
        let message = err.unwrap_err().user_message();
        assert_eq!(message, "Failed to write index.html: I/O operation failed: gone");
    }

    #[test]
    fn test_wrapped_library_errors_keep_their_message() {
        let err = CliError::from(catalog::CatalogError::DuplicateTitle("Arrays".to_string()));
        assert_eq!(
            err.user_message(),
            "The title 'Arrays' is used by more than one entry"
        );
    }
}
