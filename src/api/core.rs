//! Core editing operations for the WASM API
//!
//! This module exports the [`TestEditor`] handle, the single owner of the
//! open test. JavaScript constructs one per open test, routes every line and
//! metadata operation through it, and drops or resets it when the test is
//! abandoned. There is no shared global document.

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::models::TableTest;
use crate::parse;
use crate::{wasm_info, wasm_log, wasm_warn};

/// JavaScript-owned handle for one open table test
#[wasm_bindgen]
pub struct TestEditor {
    pub(crate) test: TableTest,
}

#[wasm_bindgen]
impl TestEditor {
    /// Create an editor holding a new empty test
    #[wasm_bindgen(constructor)]
    pub fn new() -> TestEditor {
        wasm_info!("TestEditor created");
        TestEditor {
            test: TableTest::new(),
        }
    }

    /// Replace the open test with one imported from raw multi-line text plus
    /// the submitted form fields. Title and candidate name are trimmed here;
    /// the attempt field is parsed leniently (garbage becomes 1).
    #[wasm_bindgen(js_name = importText)]
    pub fn import_text(&mut self, raw: &str, title: &str, candidate_name: &str, attempt: &str) {
        wasm_info!("importText called: {} bytes of raw text", raw.len());

        self.test = parse::import_test(raw, title.trim(), candidate_name.trim(), attempt);

        wasm_log!("  Imported {} lines", self.test.len());
    }

    /// Append a line at the end, returning its id for the host's row markup
    #[wasm_bindgen(js_name = appendLine)]
    pub fn append_line(&mut self, source: &str, target: &str) -> u32 {
        let id = self.test.append(source, target);
        wasm_log!("appendLine: allocated id {}", id);
        id
    }

    /// Insert a line before `index` (clamped to the collection length),
    /// returning its id
    #[wasm_bindgen(js_name = insertLineAt)]
    pub fn insert_line_at(&mut self, index: usize, source: &str, target: &str) -> u32 {
        let id = self.test.insert_at(index, source, target);
        wasm_log!("insertLineAt: allocated id {} at index {}", id, index);
        id
    }

    /// Delete the line with the given id. Unknown ids change nothing.
    #[wasm_bindgen(js_name = deleteLine)]
    pub fn delete_line(&mut self, id: u32) {
        if self.test.find_index_by_id(id).is_none() {
            wasm_warn!("deleteLine: no line with id {}", id);
            return;
        }

        self.test.delete_by_id(id);
        wasm_log!("deleteLine: removed id {}", id);
    }

    /// Replace the text of the line with the given id. Unknown ids change
    /// nothing.
    #[wasm_bindgen(js_name = updateLine)]
    pub fn update_line(&mut self, id: u32, source: &str, target: &str) {
        if self.test.find_index_by_id(id).is_none() {
            wasm_warn!("updateLine: no line with id {}", id);
            return;
        }

        self.test.update_by_id(id, source, target);
    }

    /// Number of lines in the open test
    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.test.len()
    }

    /// True when the open test has no lines
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.test.is_empty()
    }

    /// All lines as a JavaScript array of `{ id, source, target }` objects,
    /// in collection order
    #[wasm_bindgen(js_name = getLines)]
    pub fn get_lines(&self) -> Result<js_sys::Array, JsValue> {
        let result = js_sys::Array::new();
        for line in &self.test.lines {
            result.push(&serialize(line, "Line serialization error")?);
        }

        Ok(result)
    }

    /// One line by id, or `undefined` when no line has it
    #[wasm_bindgen(js_name = getLine)]
    pub fn get_line(&self, id: u32) -> Result<JsValue, JsValue> {
        serialize(&self.test.line_by_id(id), "Line serialization error")
    }

    /// Set the source-text title from raw form input (trimmed here)
    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: &str) {
        self.test.set_title(title.trim());
    }

    /// Set the candidate name from raw form input (trimmed here)
    #[wasm_bindgen(js_name = setCandidateName)]
    pub fn set_candidate_name(&mut self, name: &str) {
        self.test.set_candidate_name(name.trim());
    }

    /// Set the attempt number; values below 1 are coerced to 1
    #[wasm_bindgen(js_name = setAttemptNumber)]
    pub fn set_attempt_number(&mut self, attempt: i32) {
        self.test.set_attempt_number(i64::from(attempt));
    }

    /// Canonical identifying name, derived from the current metadata on
    /// every call
    #[wasm_bindgen(js_name = canonicalTitle)]
    pub fn canonical_title(&self) -> String {
        self.test.canonical_title()
    }

    /// Discard the open test entirely: lines, metadata, and the id counter
    pub fn reset(&mut self) {
        wasm_info!("reset: discarding current test");
        self.test.reset();
    }
}
