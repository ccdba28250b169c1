//! Error type shared by the vault, settings and block processing layers.
//!
//! The section parser and template filling are infallible; everything that touches the file
//! system or tree-sitter goes through this enum.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for fallible daily-summary operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the document store, settings file and block processor.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The settings file holds malformed JSON.
    #[error("invalid settings in {}: {source}", .path.display())]
    Settings {
        /// Settings file that failed to parse.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// Serialising settings failed.
    #[error("failed to serialise settings: {0}")]
    Json(#[from] serde_json::Error),

    /// Walking the vault directory failed.
    #[error("failed to scan vault: {0}")]
    Walk(#[from] walkdir::Error),

    /// The tree-sitter grammar could not be loaded.
    #[error("failed to load markdown grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The tree-sitter query did not compile.
    #[error("invalid block query: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// Tree-sitter returned no syntax tree.
    #[error("failed to parse {0}")]
    Parse(String),

    /// No document exists at the requested vault path.
    #[error("document not found: {0}")]
    DocumentNotFound(String),
}

impl Error {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
