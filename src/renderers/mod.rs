//! Renderers module: export-side codecs
//!
//! One renderer today: the HTML document exporter and its word-processor
//! variant.

pub mod html;

pub use self::html::{to_html, to_word_html, export_file_name, DocumentKind};
