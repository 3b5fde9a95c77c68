//! Identifier and keyword lexing.

use xcdn_util::{Result, Span};

use crate::token::{Token, TokenKind};

use super::Lexer;

/// True for bytes that may start an identifier: `A-Z a-z _`.
#[inline]
pub(super) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// True for bytes that may continue an identifier: start set plus
/// `0-9` and `-`.
#[inline]
pub(super) fn is_ident_part(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit() || b == b'-'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier, longest match, then checks for the
    /// `true` / `false` / `null` keywords.
    pub(super) fn lex_ident(&mut self, start: Span) -> Result<Token> {
        let begin = self.cursor.position();
        self.cursor.bump();
        while self.cursor.peek().is_some_and(is_ident_part) {
            self.cursor.bump();
        }

        let kind = match self.cursor.slice_from(begin) {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            text => TokenKind::Ident(text.to_string()),
        };
        Ok(Token::new(kind, start))
    }
}
