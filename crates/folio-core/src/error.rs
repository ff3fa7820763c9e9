//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations.
///
/// Rendering never fails; everything here comes from loading a config
/// file or building a catalog out of it.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Two records in one catalog share an id
    #[error("Duplicate artwork id: {0}")]
    DuplicateArtwork(String),

    /// A record is missing a required field
    #[error("Invalid artwork {id}: {reason}")]
    InvalidArtwork { id: String, reason: String },

    /// Config file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
