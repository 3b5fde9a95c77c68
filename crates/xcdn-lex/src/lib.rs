//! xcdn-lex - Tokenizer for the xCDN data notation.
//!
//! The lexer transforms xCDN source text into a stream of tokens, one
//! call at a time. It is the first phase of the pipeline:
//!
//! ```text
//! text ──lexer──▶ tokens ──parser──▶ Document ──serializer──▶ text
//! ```
//!
//! # Token categories
//!
//! - **Punctuation**: `{ } [ ] ( ) : , $ # @` — one byte each.
//! - **Keywords**: `true`, `false`, `null` — recognized by exact match
//!   after an identifier read; anything else is an [`TokenKind::Ident`].
//! - **Identifiers**: start `[A-Za-z_]`, continue `[A-Za-z0-9_-]`.
//! - **Numbers**: optional sign, digits, optional fraction, optional
//!   exponent. A literal containing `.` or `e`/`E` is a float, otherwise
//!   a signed 64-bit integer.
//! - **Strings**: `"…"` with escape decoding, or `"""…"""` with no
//!   escape processing and inner newlines preserved.
//! - **Typed strings**: a prefix letter from `{d, b, u, t, r}` directly
//!   followed by `"` opens a quoted body whose token kind records the
//!   prefix (`d"…"` decimal, `b"…"` base64 bytes, `u"…"` UUID, `t"…"`
//!   datetime, `r"…"` duration). The lexer carries the inner text
//!   verbatim; decoding and validation happen in the parser.
//!
//! Whitespace (space, tab, carriage return, newline) and comments
//! (`// …` and `/* … */`, non-nesting) separate tokens and are skipped.
//! An unterminated block comment silently consumes the rest of the
//! input; the next token is `Eof`.
//!
//! # Position tracking
//!
//! The lexer reads the source byte-by-byte and maintains the byte
//! offset plus 1-based line and column. Every token is stamped with the
//! [`Span`](xcdn_util::Span) of its first byte, and spans are
//! monotonically non-decreasing across the token stream.
//!
//! # Example
//!
//! ```
//! use xcdn_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("port: 8080");
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Ident("port".into()));
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Colon);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Int(8080));
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
//! ```

pub mod cursor;
pub mod token;

mod lexer;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
