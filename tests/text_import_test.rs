// Test the text-import entry point and the editing workflow built on it

use tabletest_wasm::models::TableTest;
use tabletest_wasm::parse::{import_from_text, import_test};
use tabletest_wasm::renderers::html::to_html;

#[test]
fn test_trailing_newline_produces_trailing_blank_line() {
    let test = import_from_text("a\nb\n");

    let sources: Vec<&str> = test.lines.iter().map(|line| line.source.as_str()).collect();
    assert_eq!(sources, vec!["a", "b", ""],
               "the segment after the final newline is kept");
}

#[test]
fn test_every_line_starts_untranslated() {
    let test = import_from_text("der Wald\nder Baum\nder Fluss");

    assert_eq!(test.len(), 3);
    assert!(test.lines.iter().all(|line| line.target.is_empty()));
}

#[test]
fn test_import_test_composes_text_and_metadata() {
    let test = import_test("der Wald\nder Baum", "Forest", "Alice", "2");

    assert_eq!(test.canonical_title(), "SNKTEST_Alice_Forest_2");
    assert_eq!(test.len(), 2);
}

#[test]
fn test_lenient_attempt_field() {
    assert_eq!(import_test("x", "t", "c", "2").metadata.attempt_number, 2);
    assert_eq!(import_test("x", "t", "c", " 2 ").metadata.attempt_number, 2);
    assert_eq!(import_test("x", "t", "c", "soon").metadata.attempt_number, 1);
    assert_eq!(import_test("x", "t", "c", "-3").metadata.attempt_number, 1);
    assert_eq!(import_test("x", "t", "c", "").metadata.attempt_number, 1);
}

#[test]
fn test_translation_workflow() {
    // Import the source text, translate line by line, drop a duplicate,
    // then export. This is the path a real test session takes.
    let mut test = import_test("der Wald\nder Wald\nder Baum", "Forest", "Alice", "1");

    let ids: Vec<u32> = test.lines.iter().map(|line| line.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    test.delete_by_id(1);
    test.update_by_id(0, "der Wald", "the forest");
    test.update_by_id(2, "der Baum", "the tree");
    let inserted = test.insert_at(1, "der Fluss", "the river");
    assert_eq!(inserted, 3, "insertion allocates a fresh id past the deleted one");

    let html = to_html(&test);
    assert!(html.contains("<tr id=\"line-0\"><td class=\"source\">der Wald</td><td class=\"target\">the forest</td></tr>"));
    assert!(html.contains("<tr id=\"line-3\"><td class=\"source\">der Fluss</td><td class=\"target\">the river</td></tr>"));
    assert!(html.contains("<tr id=\"line-2\"><td class=\"source\">der Baum</td><td class=\"target\">the tree</td></tr>"));
    assert!(!html.contains("line-1"), "the deleted line must not be exported");
}

#[test]
fn test_reimporting_text_starts_a_fresh_collection() {
    let mut test = import_test("one\ntwo", "First", "Alice", "1");
    test.update_by_id(0, "one", "eins");

    // The importer builds a new collection; the caller replaces the old one
    test = import_test("three", "Second", "Alice", "1");

    assert_eq!(test.len(), 1);
    assert_eq!(test.lines[0].id, 0, "fresh collection, fresh counter");
    assert_eq!(test.metadata.title, "Second");
}

#[test]
fn test_reset_then_import_reuses_nothing() {
    let mut test = TableTest::new();
    test.append("stale", "stale");
    test.set_title("Old");
    test.reset();

    assert!(test.is_empty());
    let id = test.append("fresh", "");
    assert_eq!(id, 0, "reset rewinds the id counter");
    assert_eq!(test.canonical_title(), "SNKTEST___1");
}
