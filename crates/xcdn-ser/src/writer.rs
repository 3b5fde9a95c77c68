//! The output writer: document, node, and value emission.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use xcdn_par::{Annotation, Document, Node, Value};

use crate::Format;

/// Accumulates serialized output.
pub(crate) struct Writer {
    out: String,
}

impl Writer {
    pub(crate) fn new() -> Self {
        Self { out: String::new() }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    /// Emits a whole document: the prolog, then the top-level nodes.
    ///
    /// Every directive ends with a newline in both layouts; pretty mode
    /// additionally separates successive directives and successive
    /// top-level nodes with a blank line. Compact mode separates
    /// top-level nodes with a single space so that adjacent atoms do
    /// not fuse into one token on re-parse.
    pub(crate) fn write_document(&mut self, doc: &Document, fmt: Format) {
        let mut first = true;
        for directive in &doc.prolog {
            if !first && fmt.pretty {
                self.out.push('\n');
            }
            self.out.push('$');
            self.out.push_str(&directive.name);
            self.out.push_str(": ");
            self.write_value(&directive.value, fmt, 0);
            if fmt.trailing_commas {
                self.out.push(',');
            }
            self.out.push('\n');
            first = false;
        }

        for (i, node) in doc.values.iter().enumerate() {
            if i > 0 {
                if fmt.pretty {
                    self.out.push('\n');
                } else {
                    self.out.push(' ');
                }
            }
            self.write_node(node, fmt, 0);
            if i + 1 < doc.values.len() && fmt.pretty {
                self.out.push('\n');
            }
        }
    }

    /// Emits a node: annotations, then tags, then the value, each
    /// decoration followed by one space.
    fn write_node(&mut self, node: &Node, fmt: Format, depth: usize) {
        for annotation in &node.annotations {
            self.write_annotation(annotation);
            self.out.push(' ');
        }
        for tag in &node.tags {
            self.out.push('#');
            self.out.push_str(tag);
            self.out.push(' ');
        }
        self.write_value(&node.value, fmt, depth);
    }

    /// Emits `@name` or `@name(arg, arg)`. Arguments always use the
    /// compact layout regardless of the outer format.
    fn write_annotation(&mut self, annotation: &Annotation) {
        self.out.push('@');
        self.out.push_str(&annotation.name);
        if !annotation.args.is_empty() {
            self.out.push('(');
            for (i, arg) in annotation.args.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(", ");
                }
                self.write_value(arg, Format::compact(), 0);
            }
            self.out.push(')');
        }
    }

    fn write_value(&mut self, value: &Value, fmt: Format, depth: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Int(v) => self.out.push_str(&v.to_string()),
            Value::Float(v) => self.write_float(*v),
            Value::String(s) => self.write_escaped(s),
            Value::Decimal(s) => self.write_typed('d', s),
            Value::DateTime(s) => self.write_typed('t', s),
            Value::Duration(s) => self.write_typed('r', s),
            Value::Uuid(s) => self.write_typed('u', s),
            Value::Bytes(data) => {
                self.out.push_str("b\"");
                self.out.push_str(&STANDARD.encode(data));
                self.out.push('"');
            }
            Value::Array(items) => {
                self.out.push('[');
                if fmt.pretty && !items.is_empty() {
                    self.out.push('\n');
                }
                for (i, item) in items.iter().enumerate() {
                    if fmt.pretty {
                        self.write_indent(depth + 1, fmt);
                    }
                    self.write_node(item, fmt, depth + 1);
                    if i + 1 < items.len() || fmt.trailing_commas {
                        self.out.push(',');
                    }
                    if fmt.pretty {
                        self.out.push('\n');
                    }
                }
                if fmt.pretty && !items.is_empty() {
                    self.write_indent(depth, fmt);
                }
                self.out.push(']');
            }
            Value::Object(map) => {
                self.out.push('{');
                if fmt.pretty && !map.is_empty() {
                    self.out.push('\n');
                }
                for (i, (key, node)) in map.iter().enumerate() {
                    if fmt.pretty {
                        self.write_indent(depth + 1, fmt);
                    }
                    self.write_key(key);
                    self.out.push_str(": ");
                    self.write_node(node, fmt, depth + 1);
                    if i + 1 < map.len() || fmt.trailing_commas {
                        self.out.push(',');
                    }
                    if fmt.pretty {
                        self.out.push('\n');
                    }
                }
                if fmt.pretty && !map.is_empty() {
                    self.write_indent(depth, fmt);
                }
                self.out.push('}');
            }
        }
    }

    /// Emits a typed literal: the stored text verbatim inside the
    /// prefix and quotes.
    fn write_typed(&mut self, prefix: char, text: &str) {
        self.out.push(prefix);
        self.out.push('"');
        self.out.push_str(text);
        self.out.push('"');
    }

    /// Shortest representation that still re-parses as a float: if the
    /// text carries neither `.` nor an exponent, `.0` is appended.
    fn write_float(&mut self, v: f64) {
        let text = v.to_string();
        self.out.push_str(&text);
        if !text.contains(['.', 'e', 'E']) {
            self.out.push_str(".0");
        }
    }

    /// Emits a key bare when it matches the identifier shape
    /// `[A-Za-z_][A-Za-z0-9_-]*`, quoted otherwise.
    fn write_key(&mut self, key: &str) {
        if is_simple_ident(key) {
            self.out.push_str(key);
        } else {
            self.write_escaped(key);
        }
    }

    /// Emits a quoted, escaped string.
    fn write_escaped(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04X}", c as u32));
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn write_indent(&mut self, depth: usize, fmt: Format) {
        for _ in 0..depth * fmt.indent as usize {
            self.out.push(' ');
        }
    }
}

fn is_simple_ident(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
