//! Snapshot codec: loss-free persistence of a [`TableTest`]
//!
//! A snapshot is a flat record of the complete collection state (every line
//! with its id, the metadata, and the id counter), so that restoring one is
//! bit-for-bit equal to the captured original, including the effect deleted
//! lines had on `next_id`. The JSON string form is what the host stores in
//! its key-value store, keyed by the canonical title.

use serde::{Deserialize, Serialize};

use crate::models::{TableTest, TestMetadata, Line, TEST_KEY_PREFIX};

/// Fully-faithful structured record of one test
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Every line in order, ids included
    pub lines: Vec<Line>,

    /// Test metadata
    pub metadata: TestMetadata,

    /// Id counter, carried so restored tests keep allocating fresh ids
    pub next_id: u32,
}

impl Snapshot {
    /// Capture the full state of a test. The snapshot copies; it never
    /// retains references into the collection.
    pub fn capture(test: &TableTest) -> Self {
        Self {
            lines: test.lines.clone(),
            metadata: test.metadata.clone(),
            next_id: test.next_id,
        }
    }

    /// Rebuild a test from this snapshot. The result replaces whatever the
    /// caller held before; nothing is merged.
    pub fn restore(self) -> TableTest {
        TableTest {
            lines: self.lines,
            metadata: self.metadata,
            next_id: self.next_id,
        }
    }

    /// Serialize to the JSON string form used by the storage boundary
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot back out of its JSON string form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Key under which a test's snapshot is stored: the canonical title, which
/// always begins with `SNKTEST`.
pub fn storage_key(test: &TableTest) -> String {
    test.canonical_title()
}

/// True for keys this editor owns. Listing code runs every key in the store
/// through this filter before offering it as a loadable test.
pub fn is_test_key(key: &str) -> bool {
    key.starts_with(TEST_KEY_PREFIX)
}
