//! AST types for xCDN.
//!
//! The tree is decoupled from parsing and serialization so it can be
//! constructed or consumed programmatically. A [`Document`] owns a
//! prolog of [`Directive`]s and a list of top-level [`Node`]s; a `Node`
//! is a [`Value`] enriched with ordered `#tag` and `@annotation`
//! decorations; a `Value` is one of the twelve xCDN value kinds.
//!
//! Ownership is strictly tree-shaped: every child has exactly one
//! parent and there is no syntax that could express a cycle.

use std::fmt;

use indexmap::IndexMap;

// =========================================================================
// VALUE KINDS
// =========================================================================

/// The closed set of value kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    /// `d"…"` arbitrary-precision decimal (carried as text).
    Decimal,
    String,
    /// `b"…"` base64-decoded byte vector.
    Bytes,
    /// `t"…"` RFC3339 datetime (carried as text).
    DateTime,
    /// `r"…"` ISO8601 duration (carried as text).
    Duration,
    /// `u"…"` UUID (shape-validated, case preserved).
    Uuid,
    Array,
    Object,
}

impl ValueKind {
    /// A short stable name for the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Decimal => "decimal",
            ValueKind::String => "string",
            ValueKind::Bytes => "bytes",
            ValueKind::DateTime => "datetime",
            ValueKind::Duration => "duration",
            ValueKind::Uuid => "uuid",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================================
// VALUE
// =========================================================================

/// An xCDN value.
///
/// `Decimal`, `DateTime`, `Duration` and `Uuid` keep the exact inner
/// text seen in source (without the typed prefix and quotes); only
/// `Uuid` and `Bytes` undergo structural validation at parse time.
///
/// Object entries preserve insertion order; re-setting an existing key
/// replaces the entry in place without moving it.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(String),
    String(String),
    Bytes(Vec<u8>),
    DateTime(String),
    Duration(String),
    Uuid(String),
    Array(Vec<Node>),
    Object(IndexMap<String, Node>),
}

impl Value {
    /// Creates an empty object value.
    pub fn object() -> Self {
        Value::Object(IndexMap::new())
    }

    /// Creates an empty array value.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::String(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Duration(_) => ValueKind::Duration,
            Value::Uuid(_) => ValueKind::Uuid,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    // ---------------------------------------------------------------------
    // Shorthand accessors. All are total: a kind mismatch yields the
    // null-equivalent result instead of an error.
    // ---------------------------------------------------------------------

    /// The text of a `String`, `Decimal`, `DateTime`, `Duration` or
    /// `Uuid` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s)
            | Value::Decimal(s)
            | Value::DateTime(s)
            | Value::Duration(s)
            | Value::Uuid(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, or 0 for any other kind.
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(v) => *v,
            _ => 0,
        }
    }

    /// The float payload, or 0.0 for any other kind.
    pub fn as_float(&self) -> f64 {
        match self {
            Value::Float(v) => *v,
            _ => 0.0,
        }
    }

    /// The boolean payload, or false for any other kind.
    pub fn as_bool(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    /// The byte payload of a `Bytes` value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    // ---------------------------------------------------------------------
    // Object operations
    // ---------------------------------------------------------------------

    /// Looks up `key` in an object value.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// True if an object value contains `key`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries of an object, or items of an array; 0 for any
    /// other kind.
    pub fn len(&self) -> usize {
        match self {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// True if [`len`](Value::len) is 0.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The key at ordinal position `i` in an object.
    pub fn key_at(&self, i: usize) -> Option<&str> {
        match self {
            Value::Object(map) => map.get_index(i).map(|(k, _)| k.as_str()),
            _ => None,
        }
    }

    /// The node at ordinal position `i` in an object.
    pub fn node_at(&self, i: usize) -> Option<&Node> {
        match self {
            Value::Object(map) => map.get_index(i).map(|(_, n)| n),
            _ => None,
        }
    }

    /// Inserts or updates an entry in an object value.
    ///
    /// Setting an already-present key replaces the previous node in
    /// place: the key keeps its original ordinal position. A no-op on
    /// non-object values.
    pub fn set(&mut self, key: impl Into<String>, node: Node) {
        if let Value::Object(map) = self {
            map.insert(key.into(), node);
        }
    }

    // ---------------------------------------------------------------------
    // Array operations
    // ---------------------------------------------------------------------

    /// The item at index `i` in an array value.
    pub fn at(&self, i: usize) -> Option<&Node> {
        match self {
            Value::Array(items) => items.get(i),
            _ => None,
        }
    }

    /// Appends a node to an array value. A no-op on non-array values.
    pub fn push(&mut self, node: Node) {
        if let Value::Array(items) = self {
            items.push(node);
        }
    }
}

/// Structural equality.
///
/// Object comparison is *ordered*: two objects with the same entries in
/// a different insertion order are not equal. (`IndexMap`'s own
/// equality is order-insensitive, which is not what round-trip
/// checking needs.)
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::Uuid(a), Value::Uuid(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, na), (kb, nb))| ka == kb && na == nb)
            }
            _ => false,
        }
    }
}

// =========================================================================
// DECORATIONS
// =========================================================================

/// An `@name(args…)` annotation.
///
/// Arguments are bare values; they cannot carry decorations of their
/// own.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub name: String,
    pub args: Vec<Value>,
}

impl Annotation {
    /// Creates an annotation with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// The argument at index `i`.
    pub fn arg(&self, i: usize) -> Option<&Value> {
        self.args.get(i)
    }

    /// Number of arguments.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Appends an argument.
    pub fn push_arg(&mut self, value: Value) {
        self.args.push(value);
    }
}

// =========================================================================
// NODE
// =========================================================================

/// A value enriched with ordered `#tag` and `@annotation` decorations.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Tags in source order.
    pub tags: Vec<String>,
    /// Annotations in source order.
    pub annotations: Vec<Annotation>,
    /// The decorated value.
    pub value: Value,
}

impl Node {
    /// Creates a bare node wrapping a value.
    pub fn new(value: Value) -> Self {
        Self {
            tags: Vec::new(),
            annotations: Vec::new(),
            value,
        }
    }

    /// True if the node carries tag `name`.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    /// The tag at index `i`.
    pub fn tag_at(&self, i: usize) -> Option<&str> {
        self.tags.get(i).map(String::as_str)
    }

    /// Number of tags.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Appends a tag.
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// The first annotation named `name`.
    pub fn find_annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }

    /// True if the node carries an annotation named `name`.
    pub fn has_annotation(&self, name: &str) -> bool {
        self.find_annotation(name).is_some()
    }

    /// Number of annotations.
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Appends an empty annotation and returns it for argument pushes.
    pub fn add_annotation(&mut self, name: impl Into<String>) -> &mut Annotation {
        self.annotations.push(Annotation::new(name));
        let last = self.annotations.len() - 1;
        &mut self.annotations[last]
    }
}

// =========================================================================
// DIRECTIVE AND DOCUMENT
// =========================================================================

/// A prolog directive, e.g. `$schema: "…"`.
///
/// The name excludes the leading `$`. The value is a bare value, never
/// a decorated node.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: String,
    pub value: Value,
}

/// A whole xCDN document: the prolog plus the top-level nodes.
///
/// A document may be empty (no directives and no values).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// Prolog directives in source order.
    pub prolog: Vec<Directive>,
    /// Top-level nodes in source order.
    pub values: Vec<Node>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level node.
    pub fn push_value(&mut self, node: Node) {
        self.values.push(node);
    }

    /// Appends a prolog directive.
    pub fn push_directive(&mut self, name: impl Into<String>, value: Value) {
        self.prolog.push(Directive {
            name: name.into(),
            value,
        });
    }

    /// The top-level node at index `i`.
    pub fn get(&self, i: usize) -> Option<&Node> {
        self.values.get(i)
    }

    /// Looks up `key` in the first top-level value, if that value is an
    /// object.
    pub fn get_key(&self, key: &str) -> Option<&Node> {
        self.values.first()?.value.get(key)
    }

    /// True if the first top-level value is an object containing `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.get_key(key).is_some()
    }

    /// Navigates a dot-separated path through nested objects, starting
    /// from the first top-level value.
    ///
    /// Returns `None` if any segment is missing or any intermediate
    /// value is not an object. Empty segments are skipped, so an empty
    /// path resolves to the first top-level node itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use xcdn_par::parse;
    ///
    /// let doc = parse("config: { nested: { deep: 1 } }").unwrap();
    /// let deep = doc.get_path("config.nested.deep").unwrap();
    /// assert_eq!(deep.value.as_int(), 1);
    /// assert!(doc.get_path("config.missing.deep").is_none());
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&Node> {
        let mut current = self.values.first()?;
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            current = current.value.get(segment)?;
        }
        Some(current)
    }
}
