//! Diagnostic types for lexing and parsing.
//!
//! Every failure in the pipeline is reported as a single [`Error`]
//! carrying a kind from the closed [`ErrorKind`] set, the [`Span`] where
//! the problem was detected, and a human-readable message. Tests and
//! callers should match on the kind; the message text may change.

use std::fmt;

use thiserror::Error as ThisError;

use crate::span::Span;

/// The closed set of error kinds.
///
/// Callers pattern-match on this; the accompanying message is free-form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unexpected end of input (e.g. an unterminated string).
    Eof,
    /// A byte that cannot start any token.
    InvalidToken,
    /// The parser found a token other than the one the grammar requires.
    Expected,
    /// A malformed escape sequence inside a quoted string.
    InvalidEscape,
    /// A malformed or out-of-range numeric literal.
    InvalidNumber,
    /// Reserved for `d"…"` contents; not produced by this implementation.
    InvalidDecimal,
    /// Reserved for `t"…"` contents; not produced by this implementation.
    InvalidDateTime,
    /// Reserved for `r"…"` contents; not produced by this implementation.
    InvalidDuration,
    /// A `u"…"` literal that is not a well-formed 8-4-4-4-12 UUID.
    InvalidUuid,
    /// A `b"…"` literal containing a byte outside the base64 alphabet.
    InvalidBase64,
    /// A generic diagnostic.
    Message,
    /// Reserved for allocation failure during parsing.
    OutOfMemory,
}

impl ErrorKind {
    /// A short stable name for the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Eof => "unexpected end of input",
            ErrorKind::InvalidToken => "invalid token",
            ErrorKind::Expected => "unexpected token",
            ErrorKind::InvalidEscape => "invalid escape",
            ErrorKind::InvalidNumber => "invalid number",
            ErrorKind::InvalidDecimal => "invalid decimal",
            ErrorKind::InvalidDateTime => "invalid datetime",
            ErrorKind::InvalidDuration => "invalid duration",
            ErrorKind::InvalidUuid => "invalid UUID",
            ErrorKind::InvalidBase64 => "invalid base64",
            ErrorKind::Message => "error",
            ErrorKind::OutOfMemory => "out of memory",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lex or parse failure with its source position.
///
/// # Examples
///
/// ```
/// use xcdn_util::{Error, ErrorKind, Span};
///
/// let err = Error::new(ErrorKind::Expected, Span::new(4, 1, 5), "expected ':'");
/// assert_eq!(err.kind, ErrorKind::Expected);
/// assert_eq!(err.span.column, 5);
/// ```
#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("{kind}: {message} at {span}")]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Where it was detected.
    pub span: Span,
    /// Human-readable detail; not part of the API contract.
    pub message: String,
}

impl Error {
    /// Create an error.
    pub fn new(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }
}

/// Result type alias used throughout the pipeline.
pub type Result<T> = std::result::Result<T, Error>;
