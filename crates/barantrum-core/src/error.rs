//! Error types for the Barantrum City Archive

use thiserror::Error;

/// Main error type for archive operations.
///
/// Runtime navigation is infallible; only loading the lore asset and
/// parsing user-supplied configuration can fail.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Lore file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Lore document is not valid JSON or does not match the schema
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// View name did not match any archive view
    #[error("Unknown view: {0}")]
    UnknownView(String),
}

/// Result type alias using ArchiveError
pub type ArchiveResult<T> = Result<T, ArchiveError>;
