//! Core data structures for the translation table-test editor
//!
//! This module defines the line-based document model: a test is an ordered
//! collection of source/target text pairs plus the metadata that names it.

use serde::{Deserialize, Serialize};

/// Prefix shared by every storage key this editor writes. The loader uses it
/// to filter test entries out of unrelated key-value store contents.
pub const TEST_KEY_PREFIX: &str = "SNKTEST";

/// A single line of the test: text in the source language and its translation.
///
/// The id is allocated by the owning [`TableTest`] and never changes afterwards;
/// two lines with identical text but different ids are distinct values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Collection-assigned identifier, unique within one TableTest
    pub id: u32,

    /// Text in the source language
    pub source: String,

    /// Translated text; empty until the candidate fills it in
    pub target: String,
}

impl Line {
    /// Create a new Line. Only [`TableTest`] should pick the id.
    pub(crate) fn new(id: u32, source: String, target: String) -> Self {
        Self { id, source, target }
    }
}

/// Metadata identifying one test run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TestMetadata {
    /// Title of the source text
    pub title: String,

    /// Name of the candidate taking the test
    pub candidate_name: String,

    /// Attempt counter, always >= 1
    pub attempt_number: u32,
}

impl Default for TestMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            candidate_name: String::new(),
            attempt_number: 1,
        }
    }
}

impl TestMetadata {
    /// Create new default metadata
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ordered, mutable collection of [`Line`]s plus test metadata.
///
/// This is the single source of truth while a test is open. It owns id
/// allocation: `next_id` counts every line ever added and is never reused,
/// even after deletions, so surviving ids stay pairwise distinct.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TableTest {
    /// Lines in reading order
    pub lines: Vec<Line>,

    /// Test metadata (title, candidate, attempt)
    pub metadata: TestMetadata,

    /// Next id to hand out; strictly greater than every id ever issued
    pub next_id: u32,
}

impl TableTest {
    /// Create a new empty test
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            metadata: TestMetadata::new(),
            next_id: 0,
        }
    }

    /// Allocate a fresh id. Ids are never reused, even after deletion.
    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a line at the end, returning its freshly allocated id
    pub fn append(&mut self, source: impl Into<String>, target: impl Into<String>) -> u32 {
        let id = self.allocate_id();
        self.lines.push(Line::new(id, source.into(), target.into()));
        id
    }

    /// Insert a line before `index`, returning its freshly allocated id.
    /// `index` is clamped to `[0, len]`, so this always succeeds.
    pub fn insert_at(
        &mut self,
        index: usize,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> u32 {
        let id = self.allocate_id();
        let index = index.min(self.lines.len());
        self.lines
            .insert(index, Line::new(id, source.into(), target.into()));
        id
    }

    /// Remove the line with the given id. Unknown ids are a silent no-op;
    /// callers that need to confirm existence first use [`find_index_by_id`].
    ///
    /// [`find_index_by_id`]: TableTest::find_index_by_id
    pub fn delete_by_id(&mut self, id: u32) {
        if let Some(index) = self.find_index_by_id(id) {
            self.lines.remove(index);
        }
    }

    /// Position of the line with the given id
    pub fn find_index_by_id(&self, id: u32) -> Option<usize> {
        self.lines.iter().position(|line| line.id == id)
    }

    /// Position of a line matching exactly on (id, source, target)
    pub fn find_index_by_value(&self, line: &Line) -> Option<usize> {
        self.lines.iter().position(|candidate| candidate == line)
    }

    /// Get the line with the given id
    pub fn line_by_id(&self, id: u32) -> Option<&Line> {
        self.find_index_by_id(id).map(|index| &self.lines[index])
    }

    /// Update the text of the line with the given id. Unknown ids are a
    /// silent no-op, same as deletion.
    pub fn update_by_id(&mut self, id: u32, source: impl Into<String>, target: impl Into<String>) {
        if let Some(index) = self.find_index_by_id(id) {
            self.lines[index].source = source.into();
            self.lines[index].target = target.into();
        }
    }

    /// Set the source-text title. Stored verbatim; trimming raw form input
    /// is the caller's decision.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = title.into();
    }

    /// Set the candidate name. Stored verbatim, like the title.
    pub fn set_candidate_name(&mut self, name: impl Into<String>) {
        self.metadata.candidate_name = name.into();
    }

    /// Set the attempt number. Non-positive values coerce to 1.
    pub fn set_attempt_number(&mut self, attempt: i64) {
        self.metadata.attempt_number = attempt.clamp(1, i64::from(u32::MAX)) as u32;
    }

    /// True iff the test has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines in the test
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Clear everything: lines, metadata, and the id counter. Used when
    /// abandoning the current test.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.metadata = TestMetadata::new();
        self.next_id = 0;
    }

    /// Canonical identifying name, recomputed from the current metadata on
    /// every call: `SNKTEST_<candidate>_<title>_<attempt>`. It doubles as the
    /// storage key and as the exported document title.
    pub fn canonical_title(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            TEST_KEY_PREFIX,
            self.metadata.candidate_name,
            self.metadata.title,
            self.metadata.attempt_number
        )
    }
}

impl Default for TableTest {
    fn default() -> Self {
        Self::new()
    }
}
