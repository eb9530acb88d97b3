//! Snapshot persistence operations for the WASM API
//!
//! The crate produces and consumes snapshot strings; the host owns the
//! actual key-value store and performs the reads and writes. The contract:
//! store the `saveSnapshot` string under the `storageKey` key, and list
//! loadable tests by filtering stored keys through `isTestKey`.

use wasm_bindgen::prelude::*;

use crate::api::core::TestEditor;
use crate::snapshot::{self, Snapshot};
use crate::{wasm_error, wasm_info};

#[wasm_bindgen]
impl TestEditor {
    /// Serialize the open test to its loss-free snapshot string, including
    /// line ids and the id counter
    #[wasm_bindgen(js_name = saveSnapshot)]
    pub fn save_snapshot(&self) -> Result<String, JsValue> {
        wasm_info!("saveSnapshot called");

        let json = Snapshot::capture(&self.test).to_json().map_err(|e| {
            wasm_error!("Snapshot serialization error: {}", e);
            JsValue::from_str(&format!("Snapshot serialization error: {}", e))
        })?;

        wasm_info!("  Snapshot generated: {} bytes", json.len());
        Ok(json)
    }

    /// Key under which the host should store the snapshot string; equal to
    /// the canonical title
    #[wasm_bindgen(js_name = storageKey)]
    pub fn storage_key(&self) -> String {
        snapshot::storage_key(&self.test)
    }

    /// Replace the open test with one restored from a snapshot string. On
    /// failure the open test is left untouched.
    #[wasm_bindgen(js_name = loadSnapshot)]
    pub fn load_snapshot(&mut self, json: &str) -> Result<(), JsValue> {
        wasm_info!("loadSnapshot called: {} bytes", json.len());

        let snapshot = Snapshot::from_json(json).map_err(|e| {
            wasm_error!("Snapshot parse error: {}", e);
            JsValue::from_str(&format!("Snapshot parse error: {}", e))
        })?;

        self.test = snapshot.restore();

        wasm_info!("  Restored {} lines", self.test.len());
        Ok(())
    }
}

/// True for key-value store keys this editor owns. The host runs every key
/// through this filter when listing loadable tests.
#[wasm_bindgen(js_name = isTestKey)]
pub fn is_test_key(key: &str) -> bool {
    snapshot::is_test_key(key)
}
