use thiserror::Error;

/// Errors surfaced by the modelgen core.
///
/// Every failure is terminal for the current operation; nothing is retried.
/// Each variant preserves its underlying cause so callers can render a full
/// chain and map the kind to whatever protocol they speak.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration record is malformed or incomplete.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The database connection could not be opened.
    #[error("connection error: {0}")]
    Connection(#[source] tokio_postgres::Error),

    /// An introspection call failed mid-extraction.
    #[error("extraction error while {context}: {source}")]
    Extraction {
        /// What the extractor was doing, e.g. "listing columns of orders"
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Generation was asked to process a malformed schema.
    #[error("generation error: {0}")]
    Generation(String),

    /// A generated unit could not be persisted.
    #[error("write error for {unit}: {source}")]
    Write {
        /// The generated type name (or output directory) that failed
        unit: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap a backend failure in an [`Error::Extraction`].
    pub fn extraction(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Extraction {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
