//! Export and import operations for the WASM API
//!
//! This module provides the document-format boundary of the editor:
//! - HTML: plain self-contained test document
//! - Word HTML: the same document decorated for word processors
//! - Document import: reading either export back into the open test
//!
//! The host turns the returned strings into downloads; file naming comes
//! from `exportFileName`.

use wasm_bindgen::prelude::*;

use crate::api::core::TestEditor;
use crate::renderers::html::DocumentKind;
use crate::{wasm_error, wasm_info, wasm_log};

#[wasm_bindgen]
impl TestEditor {
    /// Export the open test as a plain self-contained HTML document
    #[wasm_bindgen(js_name = exportHtml)]
    pub fn export_html(&self) -> String {
        wasm_info!("exportHtml called");

        let html = crate::renderers::html::to_html(&self.test);

        wasm_info!("  HTML generated: {} bytes", html.len());
        html
    }

    /// Export the open test in the word-processor variant: same content plus
    /// Office namespaces and the print-view directive
    #[wasm_bindgen(js_name = exportWordHtml)]
    pub fn export_word_html(&self) -> String {
        wasm_info!("exportWordHtml called");

        let html = crate::renderers::html::to_word_html(&self.test);

        wasm_info!("  Word HTML generated: {} bytes", html.len());
        html
    }

    /// File name for the host's download offer: the canonical title plus
    /// `.doc` for the word variant, `.html` otherwise
    #[wasm_bindgen(js_name = exportFileName)]
    pub fn export_file_name(&self, word: bool) -> String {
        let kind = if word { DocumentKind::Word } else { DocumentKind::Plain };
        crate::renderers::html::export_file_name(&self.test, kind)
    }

    /// Replace the open test with one parsed from a previously exported
    /// document (either variant). Imported lines get fresh ids. On failure
    /// the open test is left untouched.
    #[wasm_bindgen(js_name = importDocument)]
    pub fn import_document(&mut self, text: &str) -> Result<(), JsValue> {
        wasm_info!("importDocument called: {} bytes", text.len());

        let imported = crate::converters::document::parse_document(text).map_err(|e| {
            wasm_error!("Document import error: {}", e);
            JsValue::from_str(&format!("Document import error: {}", e))
        })?;

        wasm_log!("  Imported {} lines", imported.len());
        self.test = imported;

        wasm_info!("importDocument completed successfully");
        Ok(())
    }
}
