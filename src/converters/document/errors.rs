//! Error types for document import
//!
//! Import is deliberately lenient about content it does not recognize, so
//! the taxonomy is small: either the markup is not parseable at all, or one
//! of the well-known metadata fields is missing entirely.

use thiserror::Error;

/// Fatal document import errors
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// Markup is malformed (not well-formed)
    #[error("Invalid document markup: {0}")]
    InvalidMarkup(String),

    /// One of the three well-known metadata field identifiers was not found
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
