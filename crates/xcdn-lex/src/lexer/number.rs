//! Number literal lexing.
//!
//! A number is an optional sign, decimal digits, an optional `.`
//! fraction, and an optional `e`/`E` exponent with its own optional
//! sign. A literal containing `.` or an exponent is a float; everything
//! else is a signed 64-bit integer. There are no hex/octal/binary forms
//! and no digit separators.

use xcdn_util::{Error, ErrorKind, Result, Span};

use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal.
    ///
    /// # Errors
    ///
    /// `InvalidNumber` for a sign with no digits, an exponent with no
    /// digits, an integer overflowing `i64`, or a float that does not
    /// round to a finite binary64.
    pub(super) fn lex_number(&mut self, start: Span) -> Result<Token> {
        let begin = self.cursor.position();
        let mut has_dot = false;
        let mut has_exp = false;
        let mut has_digit = false;

        if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
            self.cursor.bump();
        }

        loop {
            match self.cursor.peek() {
                Some(b'0'..=b'9') => {
                    has_digit = true;
                    self.cursor.bump();
                }
                Some(b'.') if !has_dot && !has_exp => {
                    has_dot = true;
                    self.cursor.bump();
                }
                Some(b'e' | b'E') if !has_exp => {
                    has_exp = true;
                    self.cursor.bump();
                    if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                        self.cursor.bump();
                    }
                }
                _ => break,
            }
        }

        if !has_digit {
            return Err(Error::new(
                ErrorKind::InvalidNumber,
                start,
                "no digits in number",
            ));
        }

        let text = self.cursor.slice_from(begin);

        if has_dot || has_exp {
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Token::new(TokenKind::Float(v), start)),
                _ => Err(Error::new(
                    ErrorKind::InvalidNumber,
                    start,
                    format!("invalid float: {}", text),
                )),
            }
        } else {
            match text.parse::<i64>() {
                Ok(v) => Ok(Token::new(TokenKind::Int(v), start)),
                Err(_) => Err(Error::new(
                    ErrorKind::InvalidNumber,
                    start,
                    format!("invalid integer: {}", text),
                )),
            }
        }
    }
}
