//! Format converters
//!
//! This module contains converters from external document formats back into
//! the editor's table-test model.

pub mod document;

// Re-export for convenience
pub use document::{parse_document, DocumentError, DocumentParseResult};
