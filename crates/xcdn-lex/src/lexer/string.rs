//! String literal lexing: quoted, triple-quoted, and typed.

use xcdn_util::{Error, ErrorKind, Result, Span};

use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a quoted string literal, decoding escape sequences.
    pub(super) fn lex_string(&mut self, start: Span) -> Result<Token> {
        let content = self.read_quoted(start)?;
        Ok(Token::new(TokenKind::Str(content), start))
    }

    /// Lexes a `"""…"""` literal. No escape processing; inner newlines
    /// are preserved verbatim.
    pub(super) fn lex_triple_string(&mut self, start: Span) -> Result<Token> {
        self.cursor.bump();
        self.cursor.bump();
        self.cursor.bump();

        let begin = self.cursor.position();
        loop {
            if self.cursor.peek() == Some(b'"')
                && self.cursor.peek_at(1) == Some(b'"')
                && self.cursor.peek_at(2) == Some(b'"')
            {
                let content = self.cursor.slice_from(begin).to_string();
                self.cursor.bump();
                self.cursor.bump();
                self.cursor.bump();
                return Ok(Token::new(TokenKind::TripleStr(content), start));
            }
            if self.cursor.bump().is_none() {
                return Err(Error::new(
                    ErrorKind::Eof,
                    start,
                    "unterminated triple-quoted string",
                ));
            }
        }
    }

    /// Lexes a typed string: the prefix letter has been seen, `make`
    /// wraps the inner text in the matching token kind.
    pub(super) fn lex_typed_string(
        &mut self,
        make: fn(String) -> TokenKind,
        start: Span,
    ) -> Result<Token> {
        self.cursor.bump(); // the type letter
        let inner = self.read_quoted(start)?;
        Ok(Token::new(make(inner), start))
    }

    /// Reads a `"…"` body, decoding escapes, and consumes the closing
    /// quote. `start` is the span reported for errors anywhere in the
    /// string.
    fn read_quoted(&mut self, start: Span) -> Result<String> {
        self.cursor.bump(); // opening quote

        let mut content = String::new();
        let mut run = self.cursor.position();
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(Error::new(ErrorKind::Eof, start, "unterminated string"));
                }
                Some(b'"') => {
                    content.push_str(self.cursor.slice_from(run));
                    self.cursor.bump();
                    return Ok(content);
                }
                Some(b'\\') => {
                    content.push_str(self.cursor.slice_from(run));
                    self.cursor.bump();
                    content.push(self.read_escape(start)?);
                    run = self.cursor.position();
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }

    /// Decodes one escape sequence; the leading backslash has been
    /// consumed.
    fn read_escape(&mut self, start: Span) -> Result<char> {
        let Some(e) = self.cursor.bump() else {
            return Err(Error::new(
                ErrorKind::InvalidEscape,
                start,
                "incomplete escape at end of input",
            ));
        };

        match e {
            b'"' => Ok('"'),
            b'\\' => Ok('\\'),
            b'/' => Ok('/'),
            b'b' => Ok('\u{0008}'),
            b'f' => Ok('\u{000C}'),
            b'n' => Ok('\n'),
            b'r' => Ok('\r'),
            b't' => Ok('\t'),
            b'u' => {
                let mut code: u32 = 0;
                for _ in 0..4 {
                    let digit = self
                        .cursor
                        .bump()
                        .and_then(|h| (h as char).to_digit(16))
                        .ok_or_else(|| {
                            Error::new(ErrorKind::InvalidEscape, start, "invalid \\uXXXX escape")
                        })?;
                    code = code * 16 + digit;
                }
                char::from_u32(code).ok_or_else(|| {
                    Error::new(
                        ErrorKind::InvalidEscape,
                        start,
                        format!("\\u{:04X} is not a Unicode scalar value", code),
                    )
                })
            }
            other => Err(Error::new(
                ErrorKind::InvalidEscape,
                start,
                format!("unknown escape '\\{}'", other as char),
            )),
        }
    }
}
