//! xcdn-ser - Serializer for xCDN documents.
//!
//! Walks a [`Document`](xcdn_par::Document) and produces xCDN text in
//! one of two preset layouts or a custom [`Format`]:
//!
//! - [`to_string_pretty`] - newlines, two-space indentation, trailing
//!   commas, a blank line between top-level nodes.
//! - [`to_string_compact`] - no indentation; containers on one line.
//!
//! Serialization is total: it cannot fail and needs no `Result`.
//! Re-parsing the output of either preset yields a structurally equal
//! document.
//!
//! # Example
//!
//! ```
//! use xcdn_par::parse;
//! use xcdn_ser::{to_string_compact, to_string_pretty};
//!
//! let doc = parse("{ a: 1, b: [2, 3] }").unwrap();
//! assert_eq!(to_string_compact(&doc), "{a: 1,b: [2,3]}");
//! assert_eq!(
//!     to_string_pretty(&doc),
//!     "{\n  a: 1,\n  b: [\n    2,\n    3,\n  ],\n}"
//! );
//! ```

mod writer;

use xcdn_par::Document;

use writer::Writer;

/// Output layout options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Format {
    /// Emit newlines and indentation.
    pub pretty: bool,
    /// Indent width in spaces per nesting level.
    pub indent: u32,
    /// Emit a comma after the last element of containers and after
    /// directives.
    pub trailing_commas: bool,
}

impl Format {
    /// The pretty preset: indented, two spaces, trailing commas.
    pub const fn pretty() -> Self {
        Self {
            pretty: true,
            indent: 2,
            trailing_commas: true,
        }
    }

    /// The compact preset: single line containers, no trailing commas.
    pub const fn compact() -> Self {
        Self {
            pretty: false,
            indent: 0,
            trailing_commas: false,
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::pretty()
    }
}

/// Serializes a document with the pretty preset.
pub fn to_string_pretty(doc: &Document) -> String {
    to_string_with_format(doc, Format::pretty())
}

/// Serializes a document with the compact preset.
pub fn to_string_compact(doc: &Document) -> String {
    to_string_with_format(doc, Format::compact())
}

/// Serializes a document with an explicit format.
pub fn to_string_with_format(doc: &Document, fmt: Format) -> String {
    let mut writer = Writer::new();
    writer.write_document(doc, fmt);
    writer.finish()
}
