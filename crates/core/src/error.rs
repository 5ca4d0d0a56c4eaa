//! Error types for descriptor decoding and fragment checking.
//!
//! The XML builders themselves never fail: invalid input degrades to a
//! documented default. Only the edges that read outside data can error.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the XML fragment builders.
#[derive(Error, Debug)]
pub enum Error {
    /// A descriptor could not be decoded from JSON.
    #[error("Invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generated markup is not a well-formed XML fragment.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Generated markup ended while elements were still open.
    #[error("Unclosed element at end of fragment: {0}")]
    UnclosedElement(String),
}
