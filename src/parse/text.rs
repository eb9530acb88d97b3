//! Text importer: raw multi-line input into a fresh [`TableTest`]
//!
//! The line-break character defines record boundaries; there is no escaping,
//! so a literal line break inside one test line is unrepresentable here.

use crate::models::TableTest;

/// Split raw text into lines of a new test, one [`crate::models::Line`] per
/// segment, each with an empty target.
///
/// Splitting is on `'\n'` exactly. Blank segments are kept: an empty input
/// yields one empty-source line, and a trailing newline yields a trailing
/// empty-source line. A `\r` from CRLF input stays attached to its segment.
pub fn import_from_text(raw: &str) -> TableTest {
    let mut test = TableTest::new();
    for segment in raw.split('\n') {
        test.append(segment, "");
    }
    test
}

/// Form-boundary convenience: import text and set the three metadata fields
/// in one call. `attempt_text` is parsed leniently; garbage or non-positive
/// values end up as attempt 1.
pub fn import_test(raw: &str, title: &str, candidate_name: &str, attempt_text: &str) -> TableTest {
    let mut test = import_from_text(raw);
    test.set_title(title);
    test.set_candidate_name(candidate_name);
    test.set_attempt_number(attempt_text.trim().parse::<i64>().unwrap_or(1));
    test
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmentation_preserves_trailing_blank() {
        let test = import_from_text("a\nb\n");

        let sources: Vec<&str> = test.lines.iter().map(|line| line.source.as_str()).collect();
        assert_eq!(sources, vec!["a", "b", ""]);
        assert!(test.lines.iter().all(|line| line.target.is_empty()));
    }

    #[test]
    fn test_blank_segments_become_lines() {
        let test = import_from_text("first\n\nthird");

        let sources: Vec<&str> = test.lines.iter().map(|line| line.source.as_str()).collect();
        assert_eq!(sources, vec!["first", "", "third"]);
    }

    #[test]
    fn test_empty_input_yields_one_empty_line() {
        let test = import_from_text("");

        assert_eq!(test.len(), 1);
        assert_eq!(test.lines[0].source, "");
    }

    #[test]
    fn test_crlf_carriage_return_stays_attached() {
        let test = import_from_text("a\r\nb");

        assert_eq!(test.lines[0].source, "a\r");
        assert_eq!(test.lines[1].source, "b");
    }

    #[test]
    fn test_import_order_is_input_order() {
        let test = import_from_text("one\ntwo\nthree");

        let ids: Vec<u32> = test.lines.iter().map(|line| line.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(test.next_id, 3);
    }

    #[test]
    fn test_import_test_sets_metadata() {
        let test = import_test("der Wald\n", "Forest", "Alice", "2");

        assert_eq!(test.metadata.title, "Forest");
        assert_eq!(test.metadata.candidate_name, "Alice");
        assert_eq!(test.metadata.attempt_number, 2);
        assert_eq!(test.len(), 2);
    }

    #[test]
    fn test_import_test_lenient_attempt_parsing() {
        assert_eq!(import_test("", "t", "c", "nope").metadata.attempt_number, 1);
        assert_eq!(import_test("", "t", "c", "0").metadata.attempt_number, 1);
        assert_eq!(import_test("", "t", "c", " 7 ").metadata.attempt_number, 7);
    }
}
