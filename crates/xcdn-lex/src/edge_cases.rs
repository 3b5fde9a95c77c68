//! Edge case tests for xcdn-lex

#[cfg(test)]
mod tests {
    use xcdn_util::ErrorKind;

    use crate::{Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().expect("lexing should succeed");
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let tokens = lex_all("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_edge_whitespace_only() {
        let tokens = lex_all(" \t\r\n  ");
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_edge_all_punctuation() {
        let kinds: Vec<TokenKind> = lex_all("{ } [ ] ( ) : , $ # @")
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Dollar,
                TokenKind::Hash,
                TokenKind::At,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let tokens = lex_all(&name);
        assert_eq!(tokens[0].kind, TokenKind::Ident(name));
    }

    #[test]
    fn test_edge_position_tracking() {
        let tokens = lex_all("{\n  name\n}");

        assert_eq!(tokens[0].kind, TokenKind::LBrace);
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[0].span.column, 1);

        assert_eq!(tokens[1].kind, TokenKind::Ident("name".into()));
        assert_eq!(tokens[1].span.line, 2);
        assert_eq!(tokens[1].span.column, 3);

        assert_eq!(tokens[2].kind, TokenKind::RBrace);
        assert_eq!(tokens[2].span.line, 3);
        assert_eq!(tokens[2].span.column, 1);
    }

    #[test]
    fn test_edge_eof_is_sticky() {
        let mut lexer = Lexer::new("x");
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_edge_adjacent_tokens_without_whitespace() {
        let kinds: Vec<TokenKind> = lex_all("{a:1}").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LBrace,
                TokenKind::Ident("a".into()),
                TokenKind::Colon,
                TokenKind::Int(1),
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_string_then_typed_string() {
        let kinds: Vec<TokenKind> = lex_all(r#""s" d"1""#).into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds[0], TokenKind::Str("s".into()));
        assert_eq!(kinds[1], TokenKind::Decimal("1".into()));
    }

    #[test]
    fn test_edge_invalid_byte() {
        let err = Lexer::new("%").next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
        assert_eq!(err.span.column, 1);
    }

    #[test]
    fn test_edge_error_span_after_whitespace() {
        let err = Lexer::new("   %").next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
        assert_eq!(err.span.offset, 3);
        assert_eq!(err.span.column, 4);
    }

    #[test]
    fn test_edge_spans_monotonic() {
        let src = "$v: 1,\nkey: [true, null, \"s\", 3.5, d\"1\"] // c\n#t @a(2) {x: 1}";
        let tokens = lex_all(src);
        for pair in tokens.windows(2) {
            assert!(pair[0].span.offset <= pair[1].span.offset);
            assert!(
                pair[0].span.line < pair[1].span.line
                    || (pair[0].span.line == pair[1].span.line
                        && pair[0].span.column <= pair[1].span.column)
            );
        }
    }

    // ==================== PROPERTY-BASED TESTS ====================

    #[test]
    fn test_prop_lexer_never_panics() {
        use proptest::prelude::*;

        proptest!(|(input in ".{0,200}")| {
            let mut lexer = Lexer::new(&input);
            for _ in 0..300 {
                match lexer.next_token() {
                    Ok(tok) if tok.kind == TokenKind::Eof => break,
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });
    }

    #[test]
    fn test_prop_spans_never_decrease() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9{}\\[\\]:,. \\n\"#@$]{0,120}")| {
            let mut lexer = Lexer::new(&input);
            let mut last = 0usize;
            for _ in 0..200 {
                match lexer.next_token() {
                    Ok(tok) => {
                        prop_assert!(tok.span.offset >= last);
                        last = tok.span.offset;
                        if tok.kind == TokenKind::Eof {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });
    }

    #[test]
    fn test_prop_idents_roundtrip() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_-]{0,40}")| {
            prop_assume!(input != "true" && input != "false" && input != "null");
            let mut lexer = Lexer::new(&input);
            let tok = lexer.next_token().unwrap();
            prop_assert_eq!(tok.kind, TokenKind::Ident(input));
        });
    }
}
