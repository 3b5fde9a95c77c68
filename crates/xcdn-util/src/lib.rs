//! xcdn-util - Foundation types for the xCDN pipeline.
//!
//! This crate provides the types shared by every phase of the xCDN
//! library: source positions ([`Span`]) and the diagnostic types
//! ([`Error`], [`ErrorKind`], [`Result`]).
//!
//! The lexer stamps every token with a `Span`; the parser threads spans
//! into every `Error` it produces; callers pattern-match on `ErrorKind`
//! and report `Span` positions. The error *message* is free-form
//! diagnostic text and is not part of the API contract.

pub mod error;
pub mod span;

pub use error::{Error, ErrorKind, Result};
pub use span::Span;
