//! Error types for entry_catalog
//!
//! The composition core never fails: malformed slices degrade to empty lists
//! and incomplete tab metadata disables the tab. These variants cover the
//! surrounding tooling (corpus loading, configuration, registry building).

use thiserror::Error;

/// Result type alias using our error
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Filesystem error while reading or writing a corpus
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in a group file, page manifest or count table
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A topic key was registered twice
    #[error("Duplicate topic key: {0}")]
    DuplicateTopic(String),

    /// Topic keys double as export file names
    #[error("Invalid topic key '{0}': must be non-empty without '/', '\\' or '..'")]
    InvalidTopicKey(String),

    /// A page spec references an entry group that was never loaded
    #[error("Page '{page}' references unknown entry group '{group}'")]
    UnknownGroup { page: String, group: String },

    /// Environment configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No page registered under the requested topic key
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

impl CatalogError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        CatalogError::Io { path: path.into(), source }
    }

    pub fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        CatalogError::Json { path: path.into(), source }
    }
}
