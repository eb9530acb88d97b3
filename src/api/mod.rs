//! Translation Table-Test Editor WASM API
//!
//! This module provides the JavaScript-facing API for the table-test editor.
//! It includes shared utilities for serialization, error handling, and
//! logging, as well as the editor operations organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging externs, macros, serialization helper
//! - `core`: The [`TestEditor`] handle with line and metadata operations
//! - `export`: Document export/import and download file naming
//! - `storage`: Snapshot strings and storage-key helpers

pub mod helpers;
pub mod core;
pub mod export;
pub mod storage;

// Re-export the editor handle and the storage-key filter
pub use self::core::TestEditor;
pub use self::storage::is_test_key;
