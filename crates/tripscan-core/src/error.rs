//! Error types for the tripscan-core library.
//!
//! Extraction itself never fails: a document with nothing recognizable
//! yields `None`. These errors cover loading documents and configuration.

use thiserror::Error;

/// Main error type for the tripscan library.
#[derive(Error, Debug)]
pub enum TripscanError {
    /// Document loading error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to loading recognized documents.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input file type is not supported.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// A JSON document could not be parsed.
    #[error("failed to parse document {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Result type for the tripscan library.
pub type Result<T> = std::result::Result<T, TripscanError>;
