//! Whitespace and comment skipping.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Advances past whitespace, `// …` line comments, and `/* … */`
    /// block comments.
    ///
    /// Block comments do not nest. An unterminated block comment
    /// consumes the rest of the input without raising an error; the
    /// next token is `Eof`.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.cursor.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
                self.cursor.bump();
            }

            if self.cursor.peek() != Some(b'/') {
                return;
            }

            match self.cursor.peek_at(1) {
                Some(b'/') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    while let Some(b) = self.cursor.bump() {
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                Some(b'*') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    while let Some(b) = self.cursor.bump() {
                        if b == b'*' && self.cursor.peek() == Some(b'/') {
                            self.cursor.bump();
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }
}
