//! Document import parser
//!
//! Reconstructs a [`TableTest`] from previously exported document text using
//! roxmltree. Both export variants parse the same way: the word-processor
//! decoration is a namespace and a comment, invisible to this walk.

use roxmltree::{Document as XmlDocument, Node};

use super::errors::DocumentError;
use crate::models::TableTest;
use crate::renderers::html::{FIELD_ATTEMPT_NUMBER, FIELD_CANDIDATE_NAME, FIELD_SOURCE_TITLE};

/// Result type for document import operations
pub type DocumentParseResult<T> = Result<T, DocumentError>;

/// Parse exported document text back into a test.
///
/// Metadata comes from the three well-known field identifiers; a document
/// that lacks one of them is rejected with [`DocumentError::MissingField`].
/// Lines come from every table row holding exactly two data cells, in
/// document order. Rows with any other cell count are skipped silently, as
/// is everything else in the document.
///
/// Reconstructed lines get freshly allocated ids: the row identifiers baked
/// into the document only push the new counter past every embedded id, so
/// the imported id space never overlaps the exported one. The original ids
/// are lost for good; that loss is part of the format's contract. Row ids
/// too large to allocate past are ignored and the counter restarts at zero.
pub fn parse_document(text: &str) -> DocumentParseResult<TableTest> {
    // Strip the DOCTYPE declaration (roxmltree rejects DTDs, and both
    // export variants open with one)
    let text = if text.contains("<!DOCTYPE") {
        text.lines()
            .filter(|line| !line.trim_start().starts_with("<!DOCTYPE"))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        text.to_string()
    };

    let doc = XmlDocument::parse(&text).map_err(|e| DocumentError::InvalidMarkup(e.to_string()))?;

    let candidate_name = field_text(&doc, FIELD_CANDIDATE_NAME)?;
    let attempt_text = field_text(&doc, FIELD_ATTEMPT_NUMBER)?;
    let title = field_text(&doc, FIELD_SOURCE_TITLE)?;

    let mut max_embedded_id: Option<u32> = None;
    let mut rows: Vec<(String, String)> = Vec::new();

    for tr in doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "tr")
    {
        if let Some(embedded) = tr.attribute("id").and_then(parse_row_id) {
            max_embedded_id = Some(max_embedded_id.map_or(embedded, |max| max.max(embedded)));
        }

        let cells: Vec<Node> = tr
            .children()
            .filter(|node| node.is_element() && node.tag_name().name() == "td")
            .collect();
        if cells.len() != 2 {
            continue;
        }

        rows.push((collect_text(&cells[0]), collect_text(&cells[1])));
    }

    let mut test = TableTest::new();
    test.set_title(title);
    test.set_candidate_name(candidate_name);
    test.set_attempt_number(attempt_text.trim().parse::<i64>().unwrap_or(1));

    // Start allocating past every id the document carried. A counter seeded
    // near u32::MAX would overflow on a later append, so ids beyond half the
    // id space are treated like unparseable ones and allocation restarts at
    // zero.
    let fresh_start = max_embedded_id.map_or(0, |max| max.saturating_add(1));
    test.next_id = if fresh_start > u32::MAX / 2 { 0 } else { fresh_start };
    for (source, target) in rows {
        test.append(source, target);
    }

    Ok(test)
}

/// Text of the element carrying the given well-known id. The element kind
/// does not matter, only the identifier; a present-but-empty element yields
/// the empty string.
fn field_text(doc: &XmlDocument, field_id: &'static str) -> DocumentParseResult<String> {
    let node = doc
        .descendants()
        .find(|node| node.is_element() && node.attribute("id") == Some(field_id))
        .ok_or(DocumentError::MissingField(field_id))?;
    Ok(collect_text(&node))
}

/// Concatenated text of a node's descendants, markup stripped, untrimmed
fn collect_text(node: &Node) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if descendant.is_text() {
            if let Some(text) = descendant.text() {
                out.push_str(text);
            }
        }
    }
    out
}

/// Numeric part of an exported `line-N` row identifier
fn parse_row_id(id: &str) -> Option<u32> {
    id.strip_prefix("line-")?.parse().ok()
}
