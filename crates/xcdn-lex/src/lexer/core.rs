//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the token dispatch.

use xcdn_util::{Error, ErrorKind, Result, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

use super::ident::is_ident_start;

/// Lexer for xCDN source text.
///
/// Produces one token per [`next_token`](Lexer::next_token) call,
/// skipping whitespace and comments in between. The lexer is tied to a
/// single input; create a new one for each source.
pub struct Lexer<'a> {
    /// Byte cursor over the source.
    pub(super) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token in the source stream.
    ///
    /// Returns a token with kind [`TokenKind::Eof`] once the input is
    /// exhausted; calling again keeps returning `Eof`.
    ///
    /// # Errors
    ///
    /// Lexical errors (`InvalidToken`, `InvalidNumber`, `InvalidEscape`,
    /// `Eof` for unterminated strings) abort the scan; the error span is
    /// the start of the offending token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start = self.cursor.span();

        let Some(b) = self.cursor.peek() else {
            return Ok(Token::new(TokenKind::Eof, start));
        };

        // """…""" must win over a plain quote.
        if b == b'"'
            && self.cursor.peek_at(1) == Some(b'"')
            && self.cursor.peek_at(2) == Some(b'"')
        {
            return self.lex_triple_string(start);
        }

        match b {
            b'{' => self.punct(TokenKind::LBrace, start),
            b'}' => self.punct(TokenKind::RBrace, start),
            b'[' => self.punct(TokenKind::LBracket, start),
            b']' => self.punct(TokenKind::RBracket, start),
            b'(' => self.punct(TokenKind::LParen, start),
            b')' => self.punct(TokenKind::RParen, start),
            b':' => self.punct(TokenKind::Colon, start),
            b',' => self.punct(TokenKind::Comma, start),
            b'$' => self.punct(TokenKind::Dollar, start),
            b'#' => self.punct(TokenKind::Hash, start),
            b'@' => self.punct(TokenKind::At, start),
            b'"' => self.lex_string(start),
            b'.' | b'+' | b'-' | b'0'..=b'9' => self.lex_number(start),
            b'd' if self.cursor.peek_at(1) == Some(b'"') => {
                self.lex_typed_string(TokenKind::Decimal, start)
            }
            b'b' if self.cursor.peek_at(1) == Some(b'"') => {
                self.lex_typed_string(TokenKind::Bytes, start)
            }
            b'u' if self.cursor.peek_at(1) == Some(b'"') => {
                self.lex_typed_string(TokenKind::Uuid, start)
            }
            b't' if self.cursor.peek_at(1) == Some(b'"') => {
                self.lex_typed_string(TokenKind::DateTime, start)
            }
            b'r' if self.cursor.peek_at(1) == Some(b'"') => {
                self.lex_typed_string(TokenKind::Duration, start)
            }
            b if is_ident_start(b) => self.lex_ident(start),
            b => Err(Error::new(
                ErrorKind::InvalidToken,
                start,
                format!("unexpected character '{}' (0x{:02x})", b as char, b),
            )),
        }
    }

    /// Consumes one byte and emits a punctuation token.
    fn punct(&mut self, kind: TokenKind, start: Span) -> Result<Token> {
        self.cursor.bump();
        Ok(Token::new(kind, start))
    }
}
