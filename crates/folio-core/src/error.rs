//! Error types for the folio-core library.

use thiserror::Error;

/// Main error type for the folio library.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// The document text is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to certificate field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document does not have the document-analysis shape.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A block is missing its `BlockType` (strict mode only).
    #[error("block {index} has no BlockType")]
    MalformedBlock { index: usize },
}

/// Result type for the folio library.
pub type Result<T> = std::result::Result<T, FolioError>;
