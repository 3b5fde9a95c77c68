//! xcdn-par - Recursive-descent parser for xCDN.
//!
//! The parser consumes tokens from [`xcdn_lex::Lexer`] with one token
//! of lookahead and builds a [`Document`]. There is no error recovery:
//! the first error aborts parsing, no partial tree escapes, and the
//! caller receives the error with its source span.
//!
//! # Grammar
//!
//! ```ebnf
//! document    := prolog? top
//! prolog      := ('$' ident ':' node (',')?)*
//! top         := implicit_object | stream | ε
//! implicit_object := key ':' node ( (',' | ε) (key ':' node) )*
//! stream      := node+
//! node        := decoration* value
//! decoration  := '@' ident ( '(' value_args? ')' )? | '#' ident
//! value_args  := value (',' value)* (',')?
//! value       := object | array | atom
//! object      := '{' ( entry ( (',' | ε) entry )* (',')? )? '}'
//! entry       := key ':' node
//! key         := ident | string
//! array       := '[' ( node ( (',' | ε) node )* (',')? )? ']'
//! atom        := string | triple_string | int | float | 'true' | 'false'
//!              | 'null' | d_quoted | b_quoted | u_quoted | t_quoted
//!              | r_quoted
//! ```
//!
//! # Top-level disambiguation
//!
//! After the optional prolog the parser peeks one token. `Eof` means an
//! empty body. An identifier or string is consumed and the *next* token
//! decides: a `:` opens an implicit top-level object that runs to the
//! end of input; otherwise a string becomes the first value of a
//! stream, while a bare identifier is an error (`Expected`). Anything
//! else starts a stream of whitespace-separated nodes.
//!
//! # Example
//!
//! ```
//! use xcdn_par::parse;
//!
//! let doc = parse(r#"host: "localhost", port: 8080"#).unwrap();
//! assert_eq!(doc.values.len(), 1);
//! assert_eq!(doc.get_key("port").map(|n| n.value.as_int()), Some(8080));
//! ```

pub mod ast;

mod codec;

#[cfg(test)]
mod edge_cases;

pub use ast::{Annotation, Directive, Document, Node, Value, ValueKind};

use xcdn_lex::{Lexer, Token, TokenKind};
use xcdn_util::{Error, ErrorKind, Result};

/// Parses a full xCDN document.
///
/// # Errors
///
/// Returns the first lexical or syntactic error with its source span.
pub fn parse(src: &str) -> Result<Document> {
    Parser::new(src).parse_document()
}

/// Parses at most the first `len` bytes of `src`.
///
/// `len` is clamped to the source length and rounded down to a `char`
/// boundary.
pub fn parse_bounded(src: &str, len: usize) -> Result<Document> {
    let mut end = len.min(src.len());
    while !src.is_char_boundary(end) {
        end -= 1;
    }
    Parser::new(&src[..end]).parse_document()
}

/// Recursive-descent parser with one-token lookahead.
pub struct Parser<'a> {
    /// Token source.
    lexer: Lexer<'a>,
    /// Lookahead buffer.
    look: Option<Token>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            look: None,
        }
    }

    /// Parses a complete document.
    pub fn parse_document(&mut self) -> Result<Document> {
        let mut doc = Document::new();

        // Prolog: $name: value pairs with optional comma separators.
        while matches!(self.peek()?.kind, TokenKind::Dollar) {
            self.bump()?;
            let name = self.parse_ident()?;
            self.expect_colon()?;
            // A directive value parses as a full node; decorations have
            // no place on a directive and are dropped.
            let node = self.parse_node()?;
            doc.push_directive(name, node.value);
            self.eat_comma()?;
        }

        if matches!(self.peek()?.kind, TokenKind::Eof) {
            return Ok(doc);
        }

        if matches!(self.peek()?.kind, TokenKind::Ident(_) | TokenKind::Str(_)) {
            let key_tok = self.bump()?;
            if matches!(self.peek()?.kind, TokenKind::Colon) {
                self.bump()?;
                let first_key = match key_tok.kind {
                    TokenKind::Ident(key) | TokenKind::Str(key) => key,
                    _ => String::new(),
                };
                let obj = self.parse_implicit_object(first_key)?;
                doc.push_value(Node::new(obj));
                return Ok(doc);
            }
            match key_tok.kind {
                // A string without ':' is the first stream value.
                TokenKind::Str(text) => {
                    doc.push_value(Node::new(Value::String(text)));
                }
                kind => {
                    return Err(Error::new(
                        ErrorKind::Expected,
                        key_tok.span,
                        format!("expected ':' after top-level key '{}'", kind_text(&kind)),
                    ));
                }
            }
        }

        self.parse_stream_rest(&mut doc)?;
        Ok(doc)
    }

    /// Parses the entries of an implicit top-level object after its
    /// first `key ':'` has been consumed. Runs until end of input.
    fn parse_implicit_object(&mut self, first_key: String) -> Result<Value> {
        let mut obj = Value::object();
        let first = self.parse_node()?;
        obj.set(first_key, first);

        loop {
            if matches!(self.peek()?.kind, TokenKind::Eof) {
                break;
            }
            if matches!(self.peek()?.kind, TokenKind::Comma) {
                self.bump()?;
                continue;
            }
            if matches!(self.peek()?.kind, TokenKind::Ident(_) | TokenKind::Str(_)) {
                let key = self.parse_key()?;
                self.expect_colon()?;
                let node = self.parse_node()?;
                obj.set(key, node);
                continue;
            }
            let bad = self.bump()?;
            return Err(Error::new(
                ErrorKind::Expected,
                bad.span,
                format!("expected object key, found {}", bad.kind),
            ));
        }

        Ok(obj)
    }

    /// Parses stream-mode nodes until end of input.
    fn parse_stream_rest(&mut self, doc: &mut Document) -> Result<()> {
        while !matches!(self.peek()?.kind, TokenKind::Eof) {
            let node = self.parse_node()?;
            doc.push_value(node);
        }
        Ok(())
    }

    /// Parses a node: any number of decorations followed by a value.
    fn parse_node(&mut self) -> Result<Node> {
        let mut node = Node::new(Value::Null);

        loop {
            if matches!(self.peek()?.kind, TokenKind::At) {
                self.bump()?;
                let name = self.parse_ident()?;
                let mut annotation = Annotation::new(name);
                if matches!(self.peek()?.kind, TokenKind::LParen) {
                    self.bump()?;
                    annotation.args = self.parse_annotation_args()?;
                }
                node.annotations.push(annotation);
            } else if matches!(self.peek()?.kind, TokenKind::Hash) {
                self.bump()?;
                let name = self.parse_ident()?;
                node.add_tag(name);
            } else {
                break;
            }
        }

        node.value = self.parse_value()?;
        Ok(node)
    }

    /// Parses the argument list of an annotation after `(` has been
    /// consumed, including the closing `)`.
    fn parse_annotation_args(&mut self) -> Result<Vec<Value>> {
        let mut args = Vec::new();

        if matches!(self.peek()?.kind, TokenKind::RParen) {
            self.bump()?;
            return Ok(args);
        }

        loop {
            args.push(self.parse_value()?);

            let next = self.bump()?;
            match next.kind {
                TokenKind::Comma => {
                    // Trailing comma before ')' is allowed.
                    if matches!(self.peek()?.kind, TokenKind::RParen) {
                        self.bump()?;
                        break;
                    }
                }
                TokenKind::RParen => break,
                kind => {
                    return Err(Error::new(
                        ErrorKind::Expected,
                        next.span,
                        format!("expected \",\" or \")\", found {}", kind),
                    ));
                }
            }
        }

        Ok(args)
    }

    /// Parses a value: an object, an array, or an atom.
    fn parse_value(&mut self) -> Result<Value> {
        let tok = self.bump()?;
        match tok.kind {
            TokenKind::LBrace => self.parse_object(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::Str(s) | TokenKind::TripleStr(s) => Ok(Value::String(s)),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::Int(v) => Ok(Value::Int(v)),
            TokenKind::Float(v) => Ok(Value::Float(v)),
            TokenKind::Decimal(s) => Ok(Value::Decimal(s)),
            TokenKind::DateTime(s) => Ok(Value::DateTime(s)),
            TokenKind::Duration(s) => Ok(Value::Duration(s)),
            TokenKind::Bytes(s) => match codec::decode_base64(&s) {
                Some(bytes) => Ok(Value::Bytes(bytes)),
                None => Err(Error::new(
                    ErrorKind::InvalidBase64,
                    tok.span,
                    format!("invalid base64: {}", s),
                )),
            },
            TokenKind::Uuid(s) => {
                if codec::validate_uuid(&s) {
                    Ok(Value::Uuid(s))
                } else {
                    Err(Error::new(
                        ErrorKind::InvalidUuid,
                        tok.span,
                        format!("invalid UUID: {}", s),
                    ))
                }
            }
            kind => Err(Error::new(
                ErrorKind::Expected,
                tok.span,
                format!("expected value, found {}", kind),
            )),
        }
    }

    /// Parses an object body after `{` has been consumed.
    fn parse_object(&mut self) -> Result<Value> {
        let mut obj = Value::object();

        loop {
            if matches!(self.peek()?.kind, TokenKind::RBrace) {
                self.bump()?;
                break;
            }

            let key = self.parse_key()?;
            self.expect_colon()?;
            let node = self.parse_node()?;
            obj.set(key, node);

            self.eat_comma()?;
        }

        Ok(obj)
    }

    /// Parses an array body after `[` has been consumed.
    fn parse_array(&mut self) -> Result<Value> {
        let mut arr = Value::array();

        loop {
            if matches!(self.peek()?.kind, TokenKind::RBracket) {
                self.bump()?;
                break;
            }

            let node = self.parse_node()?;
            arr.push(node);

            self.eat_comma()?;
        }

        Ok(arr)
    }

    // ---------------------------------------------------------------------
    // Token plumbing
    // ---------------------------------------------------------------------

    /// Consumes and returns the next token.
    fn bump(&mut self) -> Result<Token> {
        match self.look.take() {
            Some(tok) => Ok(tok),
            None => self.lexer.next_token(),
        }
    }

    /// Returns the next token without consuming it.
    fn peek(&mut self) -> Result<&Token> {
        let tok = match self.look.take() {
            Some(tok) => tok,
            None => self.lexer.next_token()?,
        };
        Ok(self.look.insert(tok))
    }

    /// Consumes one optional comma.
    fn eat_comma(&mut self) -> Result<()> {
        if matches!(self.peek()?.kind, TokenKind::Comma) {
            self.bump()?;
        }
        Ok(())
    }

    /// Consumes a `:` or fails with `Expected` at the offending token.
    fn expect_colon(&mut self) -> Result<()> {
        let tok = self.bump()?;
        if tok.kind == TokenKind::Colon {
            Ok(())
        } else {
            Err(Error::new(
                ErrorKind::Expected,
                tok.span,
                format!("expected ':', found {}", tok.kind),
            ))
        }
    }

    /// Consumes an identifier and returns its text.
    fn parse_ident(&mut self) -> Result<String> {
        let tok = self.bump()?;
        match tok.kind {
            TokenKind::Ident(name) => Ok(name),
            kind => Err(Error::new(
                ErrorKind::Expected,
                tok.span,
                format!("expected identifier, found {}", kind),
            )),
        }
    }

    /// Consumes an object key: an identifier or a quoted string.
    fn parse_key(&mut self) -> Result<String> {
        let tok = self.bump()?;
        match tok.kind {
            TokenKind::Ident(key) | TokenKind::Str(key) => Ok(key),
            kind => Err(Error::new(
                ErrorKind::Expected,
                tok.span,
                format!("expected object key, found {}", kind),
            )),
        }
    }
}

/// The identifier text of a token kind, for error messages.
fn kind_text(kind: &TokenKind) -> &str {
    match kind {
        TokenKind::Ident(name) | TokenKind::Str(name) => name,
        other => other.name(),
    }
}
