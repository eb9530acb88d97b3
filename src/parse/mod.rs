//! Parsing module for the table-test editor
//!
//! This module contains the import logic for turning raw text
//! input into a line-based test document.

pub mod text;

// Re-export commonly used functions
pub use self::text::{import_from_text, import_test};
