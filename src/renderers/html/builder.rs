// HTML document builder state machine

use crate::models::Line;

/// Table styling embedded in every exported document. Kept minimal: the
/// document has to look like a two-column test sheet in a browser and in a
/// word processor, nothing more.
const TABLE_STYLE: &str = "\
table { border-collapse: collapse; width: 100%; }\n\
td { border: 1px solid #999999; padding: 4px 6px; width: 50%; vertical-align: top; }\n\
h1 { font-size: 1.2em; }\n";

/// Office namespaces declared on `<html>` in the word-processor variant
const WORD_NAMESPACES: &str = " xmlns:o=\"urn:schemas-microsoft-com:office:office\" xmlns:w=\"urn:schemas-microsoft-com:office:word\"";

/// Document-view directive that makes common word processors open the file
/// in print view. Parsed as a plain comment by everything else.
const WORD_VIEW_DIRECTIVE: &str =
    "<!--[if gte mso 9]><xml><w:WordDocument><w:View>Print</w:View></w:WordDocument></xml><![endif]-->";

/// State machine for building exported test documents.
///
/// Output is deliberately well-formed XML (self-closed void elements,
/// escaped text) so the companion importer can parse it back.
pub struct HtmlBuilder {
    buffer: String,
    word_variant: bool,
    table_started: bool,
}

impl HtmlBuilder {
    /// Create a builder for the plain export
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            word_variant: false,
            table_started: false,
        }
    }

    /// Create a builder for the word-processor variant. Same content, plus
    /// the Office namespaces and the print-view directive.
    pub fn new_word_variant() -> Self {
        Self {
            buffer: String::new(),
            word_variant: true,
            table_started: false,
        }
    }

    /// Write the document shell up to and including the opening of `<body>`:
    /// doctype, head with charset declaration, title, and table styling.
    pub fn begin_document(&mut self, document_title: &str) {
        self.buffer.push_str("<!DOCTYPE html>\n");
        if self.word_variant {
            self.buffer
                .push_str(&format!("<html{}>\n", WORD_NAMESPACES));
        } else {
            self.buffer.push_str("<html>\n");
        }
        self.buffer.push_str("<head>\n");
        self.buffer.push_str("<meta charset=\"utf-8\"/>\n");
        self.buffer.push_str(&format!(
            "<title>{}</title>\n",
            xml_escape(document_title)
        ));
        if self.word_variant {
            self.buffer.push_str(WORD_VIEW_DIRECTIVE);
            self.buffer.push('\n');
        }
        self.buffer.push_str("<style>\n");
        self.buffer.push_str(TABLE_STYLE);
        self.buffer.push_str("</style>\n");
        self.buffer.push_str("</head>\n");
        self.buffer.push_str("<body>\n");
        self.buffer.push_str(&format!(
            "<h1>{}</h1>\n",
            xml_escape(document_title)
        ));
    }

    /// Write one labeled metadata field. `field_id` is the stable identifier
    /// the importer locates the value by.
    pub fn write_metadata_field(&mut self, label: &str, field_id: &str, value: &str) {
        self.buffer.push_str(&format!(
            "<p>{}: <span id=\"{}\">{}</span></p>\n",
            xml_escape(label),
            field_id,
            xml_escape(value)
        ));
    }

    /// Open the two-column test table
    pub fn begin_table(&mut self) {
        self.buffer.push_str("<table>\n");
        self.table_started = true;
    }

    /// Write one test line as a two-cell row. The row id carries the line id;
    /// the cell classes tag which side is which.
    pub fn write_row(&mut self, line: &Line) {
        self.buffer.push_str(&format!(
            "<tr id=\"line-{}\"><td class=\"source\">{}</td><td class=\"target\">{}</td></tr>\n",
            line.id,
            xml_escape(&line.source),
            xml_escape(&line.target)
        ));
    }

    /// Close the test table
    pub fn end_table(&mut self) {
        self.buffer.push_str("</table>\n");
        self.table_started = false;
    }

    /// Finalize and return the complete document string
    pub fn finalize(mut self) -> String {
        if self.table_started {
            self.end_table();
        }
        self.buffer.push_str("</body>\n");
        self.buffer.push_str("</html>\n");
        self.buffer
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape special XML characters
pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            xml_escape("a & b <c> \"d\" 'e'"),
            "a &amp; b &lt;c&gt; &quot;d&quot; &apos;e&apos;"
        );
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn test_row_markup_shape() {
        let mut builder = HtmlBuilder::new();
        let line = Line {
            id: 7,
            source: "a < b".to_string(),
            target: String::new(),
        };
        builder.begin_table();
        builder.write_row(&line);
        let html = builder.finalize();

        assert!(html.contains("<tr id=\"line-7\">"));
        assert!(html.contains("<td class=\"source\">a &lt; b</td>"));
        assert!(html.contains("<td class=\"target\"></td>"));
    }

    #[test]
    fn test_word_variant_decorations() {
        let mut builder = HtmlBuilder::new_word_variant();
        builder.begin_document("SNKTEST_a_b_1");
        let html = builder.finalize();

        assert!(html.contains("urn:schemas-microsoft-com:office:word"));
        assert!(html.contains("<w:View>Print</w:View>"));

        let mut plain = HtmlBuilder::new();
        plain.begin_document("SNKTEST_a_b_1");
        let plain_html = plain.finalize();
        assert!(!plain_html.contains("mso"));
    }
}
