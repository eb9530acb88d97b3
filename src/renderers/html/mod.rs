//! Document codec, export side: one-way rendering of a [`TableTest`] into a
//! self-contained HTML test document.
//!
//! Two variants share one body: the plain export and the word-processor
//! export, which only adds Office decoration. Both are pure functions from
//! collection to string, with no presentation API involved, and both emit
//! well-formed XML so [`crate::converters::document`] can read them back.

mod builder;

pub use builder::HtmlBuilder;

use crate::models::TableTest;

/// Well-known id of the candidate-name metadata field
pub const FIELD_CANDIDATE_NAME: &str = "candidate-name";
/// Well-known id of the attempt-number metadata field
pub const FIELD_ATTEMPT_NUMBER: &str = "attempt-number";
/// Well-known id of the source-title metadata field
pub const FIELD_SOURCE_TITLE: &str = "source-title";

/// Which of the two document exports to produce
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain semantic-HTML document
    Plain,
    /// Same document decorated for word processors; conventionally named
    /// `.doc` even though the content stays HTML text
    Word,
}

impl DocumentKind {
    /// File extension used when the host offers the export as a download
    pub fn file_extension(&self) -> &'static str {
        match self {
            DocumentKind::Plain => "html",
            DocumentKind::Word => "doc",
        }
    }

    /// Content type of the download; identical for both variants
    pub fn content_type(&self) -> &'static str {
        "text/html"
    }
}

/// Export a test as a plain self-contained HTML document
pub fn to_html(test: &TableTest) -> String {
    emit_document(test, HtmlBuilder::new())
}

/// Export a test in the word-processor variant: the plain document plus
/// Office namespaces and a print-view directive, no extra content.
pub fn to_word_html(test: &TableTest) -> String {
    emit_document(test, HtmlBuilder::new_word_variant())
}

/// File name under which the host offers the export: canonical title plus
/// the variant's extension.
pub fn export_file_name(test: &TableTest, kind: DocumentKind) -> String {
    format!("{}.{}", test.canonical_title(), kind.file_extension())
}

/// Walk the collection and emit the document
fn emit_document(test: &TableTest, mut builder: HtmlBuilder) -> String {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(
        &format!("[HTML Emitter] Exporting {} lines", test.lines.len()).into(),
    );

    builder.begin_document(&test.canonical_title());

    builder.write_metadata_field(
        "Candidate",
        FIELD_CANDIDATE_NAME,
        &test.metadata.candidate_name,
    );
    builder.write_metadata_field(
        "Attempt",
        FIELD_ATTEMPT_NUMBER,
        &test.metadata.attempt_number.to_string(),
    );
    builder.write_metadata_field("Source title", FIELD_SOURCE_TITLE, &test.metadata.title);

    builder.begin_table();
    for line in &test.lines {
        builder.write_row(line);
    }
    builder.end_table();

    builder.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_test() -> TableTest {
        let mut test = TableTest::new();
        test.set_title("Forest");
        test.set_candidate_name("Alice");
        test.set_attempt_number(2);
        test.append("der Wald", "the forest");
        test.append("der Baum", "");
        test
    }

    #[test]
    fn test_head_carries_charset_title_and_style() {
        let html = to_html(&sample_test());

        assert!(html.contains("<meta charset=\"utf-8\"/>"),
                "head must declare the character encoding");
        assert!(html.contains("<title>SNKTEST_Alice_Forest_2</title>"),
                "document title must be the canonical test name");
        assert!(html.contains("border-collapse"),
                "head must carry the tabular styling");
    }

    #[test]
    fn test_body_structure() {
        let html = to_html(&sample_test());

        assert!(html.contains("<h1>SNKTEST_Alice_Forest_2</h1>"));
        assert!(html.contains("<span id=\"candidate-name\">Alice</span>"));
        assert!(html.contains("<span id=\"attempt-number\">2</span>"));
        assert!(html.contains("<span id=\"source-title\">Forest</span>"));
        assert!(html.contains("<tr id=\"line-0\"><td class=\"source\">der Wald</td><td class=\"target\">the forest</td></tr>"));
        assert!(html.contains("<tr id=\"line-1\"><td class=\"source\">der Baum</td><td class=\"target\"></td></tr>"));
    }

    #[test]
    fn test_rows_follow_collection_order() {
        let html = to_html(&sample_test());
        let first = html.find("line-0").expect("first row present");
        let second = html.find("line-1").expect("second row present");
        assert!(first < second);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut test = TableTest::new();
        test.set_title("Song & Dance <Test>");
        test.append("a < b", "c & d");
        let html = to_html(&test);

        assert!(html.contains("<td class=\"source\">a &lt; b</td>"));
        assert!(html.contains("<td class=\"target\">c &amp; d</td>"));
        assert!(html.contains("<span id=\"source-title\">Song &amp; Dance &lt;Test&gt;</span>"));
    }

    #[test]
    fn test_word_variant_is_superset_of_plain_content() {
        let test = sample_test();
        let plain = to_html(&test);
        let word = to_word_html(&test);

        assert!(word.contains("urn:schemas-microsoft-com:office:word"));
        assert!(word.contains("<w:View>Print</w:View>"));
        // Same rows and fields in both
        for needle in [
            "<span id=\"candidate-name\">Alice</span>",
            "<tr id=\"line-0\">",
            "<td class=\"source\">der Wald</td>",
        ] {
            assert!(plain.contains(needle));
            assert!(word.contains(needle));
        }
    }

    #[test]
    fn test_export_file_names() {
        let test = sample_test();
        assert_eq!(
            export_file_name(&test, DocumentKind::Plain),
            "SNKTEST_Alice_Forest_2.html"
        );
        assert_eq!(
            export_file_name(&test, DocumentKind::Word),
            "SNKTEST_Alice_Forest_2.doc"
        );
        assert_eq!(DocumentKind::Word.content_type(), "text/html");
    }

    #[test]
    fn test_empty_collection_exports_empty_table() {
        let html = to_html(&TableTest::new());
        assert!(html.contains("<table>\n</table>"));
    }
}
