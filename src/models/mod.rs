//! Models module for the table-test editor
//!
//! This module contains the data structures for the line-based
//! bilingual test document.

pub mod core;

// Re-export commonly used types
pub use self::core::{Line, TableTest, TestMetadata, TEST_KEY_PREFIX};
