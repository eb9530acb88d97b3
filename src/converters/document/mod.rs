//! Exported-document importer
//!
//! This module reads a previously exported test document (plain HTML or the
//! Word-flavored variant) back into a [`TableTest`](crate::models::TableTest).
//!
//! # Architecture
//!
//! ```text
//! Document String
//!   ↓ [Parse with roxmltree]
//! XML DOM
//!   ↓ [Read well-known metadata fields, scan table rows]
//! TableTest (fresh ids)
//! ```
//!
//! Import is lossy by design: line ids are not read back from the markup.
//! Every imported line gets a fresh id, seeded past the highest row id
//! embedded in the document so the two id spaces never overlap.

pub mod errors;
pub mod parser;

pub use errors::DocumentError;
pub use parser::{parse_document, DocumentParseResult};
