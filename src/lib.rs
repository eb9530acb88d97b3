//! Translation Table-Test Editor WASM Module
//!
//! This is the main WASM module for the translation table-test editor.
//! It provides the line-based document model for bilingual test documents
//! and the codecs that persist them (snapshot JSON, exported HTML).

pub mod models;
pub mod parse;
pub mod snapshot;
pub mod renderers;
pub mod converters;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use snapshot::Snapshot;
pub use converters::document::DocumentError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Table-test editor WASM module initialized");
}
