//! xcdn - eXtensible Cognitive Data Notation.
//!
//! xCDN is a human-authored configuration and data notation: a
//! JSON-like surface extended with unquoted identifier keys, trailing
//! commas, comments, triple-quoted strings, a prolog of `$directives`,
//! ordered objects, `#tag` / `@annotation` decorations on any value,
//! and typed string literals for decimals (`d"…"`), base64 bytes
//! (`b"…"`), UUIDs (`u"…"`), RFC3339 datetimes (`t"…"`) and ISO8601
//! durations (`r"…"`).
//!
//! This crate is the facade over the pipeline crates:
//!
//! | Crate | Role |
//! |---|---|
//! | `xcdn-util` | spans and diagnostics |
//! | `xcdn-lex`  | text → tokens |
//! | `xcdn-par`  | tokens → [`Document`] tree |
//! | `xcdn-ser`  | [`Document`] tree → text |
//!
//! # Parsing and serializing
//!
//! ```
//! use xcdn::{parse, to_string_pretty};
//!
//! let doc = parse(r#"
//! $schema: "https://example.com/s",
//! server: {
//!   host: "localhost",
//!   ports: [8080, 9090,],
//!   timeout: r"PT30S",
//! }
//! "#).unwrap();
//!
//! assert_eq!(doc.prolog[0].name, "schema");
//! assert_eq!(doc.get_path("server.host").unwrap().value.as_str(), Some("localhost"));
//!
//! let text = to_string_pretty(&doc);
//! assert_eq!(xcdn::parse(&text).unwrap(), doc);
//! ```
//!
//! # Building documents programmatically
//!
//! ```
//! use xcdn::{to_string_compact, Document, Node, Value};
//!
//! let mut obj = Value::object();
//! obj.set("enabled", Node::new(Value::Bool(true)));
//!
//! let mut doc = Document::new();
//! doc.push_directive("version", Value::Int(1));
//! doc.push_value(Node::new(obj));
//!
//! assert_eq!(to_string_compact(&doc), "$version: 1\n{enabled: true}");
//! ```

pub use xcdn_util::{Error, ErrorKind, Result, Span};

pub use xcdn_lex::{Lexer, Token, TokenKind};

pub use xcdn_par::{parse, parse_bounded, Parser};
pub use xcdn_par::{Annotation, Directive, Document, Node, Value, ValueKind};

pub use xcdn_ser::{to_string_compact, to_string_pretty, to_string_with_format, Format};
