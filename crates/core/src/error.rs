//! Error types for fapiao invoice extraction.

use thiserror::Error;

/// Primary error type for loading and extracting invoice documents.
///
/// Layout degradations (missing header row, missing subtotal marker,
/// unclassifiable blocks) are never errors; only failing to obtain the
/// positioned text of a document is.
#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid text content JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid text item {index} on page {page}: {msg}")]
    InvalidTextItem {
        page: usize,
        index: usize,
        msg: String,
    },

    #[error("document has no pages")]
    EmptyDocument,

    #[error("fragment source error: {0}")]
    Source(String),
}

/// Convenience Result type alias for InvoiceError.
pub type Result<T> = std::result::Result<T, InvoiceError>;
