//! Edge case tests for xcdn-par

#[cfg(test)]
mod tests {
    use xcdn_util::ErrorKind;

    use crate::{parse, parse_bounded, Value, ValueKind};

    fn err_kind(src: &str) -> ErrorKind {
        parse(src).unwrap_err().kind
    }

    // ==================== DOCUMENT SHAPES ====================

    #[test]
    fn test_empty_input() {
        let doc = parse("").unwrap();
        assert!(doc.prolog.is_empty());
        assert!(doc.values.is_empty());
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        let doc = parse("  // nothing here\n/* at all */\n").unwrap();
        assert!(doc.prolog.is_empty());
        assert!(doc.values.is_empty());
    }

    #[test]
    fn test_prolog_only() {
        let doc = parse("$schema: \"x\",\n$version: 2").unwrap();
        assert_eq!(doc.prolog.len(), 2);
        assert!(doc.values.is_empty());
        assert_eq!(doc.prolog[0].name, "schema");
        assert_eq!(doc.prolog[0].value.as_str(), Some("x"));
        assert_eq!(doc.prolog[1].name, "version");
        assert_eq!(doc.prolog[1].value.as_int(), 2);
    }

    #[test]
    fn test_prolog_without_commas() {
        let doc = parse("$a: 1 $b: 2\n{ x: 3 }").unwrap();
        assert_eq!(doc.prolog.len(), 2);
        assert_eq!(doc.values.len(), 1);
    }

    #[test]
    fn test_prolog_with_composite_value() {
        let doc = parse("$features: [\"a\", \"b\"],\n$limits: { max: 10 }").unwrap();
        assert_eq!(doc.prolog[0].value.kind(), ValueKind::Array);
        assert_eq!(doc.prolog[1].value.kind(), ValueKind::Object);
        assert_eq!(
            doc.prolog[1].value.get("max").map(|n| n.value.as_int()),
            Some(10)
        );
    }

    #[test]
    fn test_directive_decorations_are_dropped() {
        // A directive value parses as a node; its decorations have no
        // place on the directive and are discarded.
        let doc = parse("$icon: #small b\"aGk=\"").unwrap();
        assert_eq!(doc.prolog[0].value.as_bytes(), Some(&b"hi"[..]));
    }

    #[test]
    fn test_implicit_object() {
        let doc = parse("name: \"xcdn\",\nnested: { flag: true }").unwrap();
        assert_eq!(doc.values.len(), 1);
        let root = &doc.values[0].value;
        assert_eq!(root.kind(), ValueKind::Object);
        assert_eq!(root.key_at(0), Some("name"));
        assert_eq!(root.key_at(1), Some("nested"));
        assert!(doc.get_path("nested.flag").unwrap().value.as_bool());
    }

    #[test]
    fn test_implicit_object_with_string_key() {
        let doc = parse("\"spaced key\": 1, plain: 2").unwrap();
        let root = &doc.values[0].value;
        assert_eq!(root.key_at(0), Some("spaced key"));
        assert_eq!(root.key_at(1), Some("plain"));
    }

    #[test]
    fn test_implicit_object_whitespace_separated() {
        let doc = parse("a: 1\nb: 2\nc: 3").unwrap();
        assert_eq!(doc.values[0].value.len(), 3);
    }

    #[test]
    fn test_implicit_object_tolerates_extra_commas() {
        let doc = parse("a: 1,,b: 2,").unwrap();
        assert_eq!(doc.values[0].value.len(), 2);
    }

    #[test]
    fn test_stream_of_values() {
        let doc = parse("{ a: 1 }\n42\n").unwrap();
        assert_eq!(doc.values.len(), 2);
        assert_eq!(doc.values[0].value.kind(), ValueKind::Object);
        assert_eq!(doc.values[1].value.as_int(), 42);
    }

    #[test]
    fn test_stream_starting_with_string() {
        let doc = parse("\"first\" \"second\" 3").unwrap();
        assert_eq!(doc.values.len(), 3);
        assert_eq!(doc.values[0].value.as_str(), Some("first"));
        assert_eq!(doc.values[2].value.as_int(), 3);
    }

    #[test]
    fn test_bare_ident_at_top_level_is_error() {
        let err = parse("loose").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Expected);
    }

    #[test]
    fn test_keywords_stream_at_top_level() {
        // true/false/null are keywords, not identifiers; they stream.
        let doc = parse("true null false").unwrap();
        assert_eq!(doc.values.len(), 3);
        assert_eq!(doc.values[1].value.kind(), ValueKind::Null);
    }

    // ==================== CONTAINERS ====================

    #[test]
    fn test_empty_containers() {
        let doc = parse("{ a: {}, b: [] }").unwrap();
        let root = &doc.values[0].value;
        assert_eq!(root.get("a").map(|n| n.value.len()), Some(0));
        assert_eq!(root.get("b").map(|n| n.value.len()), Some(0));
    }

    #[test]
    fn test_trailing_commas_everywhere() {
        let doc = parse("@size(1, 2,) #t { a: [1, 2,], b: 3, }").unwrap();
        let node = &doc.values[0];
        assert_eq!(node.annotations[0].arg_count(), 2);
        assert_eq!(node.value.get("a").map(|n| n.value.len()), Some(2));
    }

    #[test]
    fn test_entries_without_commas() {
        let doc = parse("{ a: 1 b: 2 c: 3 }").unwrap();
        assert_eq!(doc.values[0].value.len(), 3);
    }

    #[test]
    fn test_double_comma_in_object_is_error() {
        assert_eq!(err_kind("{ a: 1,, b: 2 }"), ErrorKind::Expected);
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let doc = parse("{ a: 1, b: 2, a: 9 }").unwrap();
        let root = &doc.values[0].value;
        assert_eq!(root.len(), 2);
        assert_eq!(root.key_at(0), Some("a"));
        assert_eq!(root.key_at(1), Some("b"));
        assert_eq!(root.get("a").map(|n| n.value.as_int()), Some(9));
    }

    #[test]
    fn test_deep_nesting() {
        let doc = parse("{ a: { b: { c: { d: [[[1]]] } } } }").unwrap();
        let inner = doc.get_path("a.b.c.d").unwrap();
        assert_eq!(inner.value.kind(), ValueKind::Array);
    }

    #[test]
    fn test_missing_colon_in_object() {
        let err = parse("{ a 1 }").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Expected);
        // The span points at the `1` token.
        assert_eq!(err.span.offset, 4);
        assert_eq!(err.span.column, 5);
    }

    #[test]
    fn test_unclosed_object() {
        assert_eq!(err_kind("{ a: 1"), ErrorKind::Expected);
    }

    #[test]
    fn test_non_key_in_object() {
        assert_eq!(err_kind("{ 42: 1 }"), ErrorKind::Expected);
    }

    // ==================== DECORATIONS ====================

    #[test]
    fn test_multiple_decorations_in_order() {
        let doc = parse("@size(100, 200) @visible #important #urgent \"task\"").unwrap();
        let node = &doc.values[0];

        assert_eq!(node.annotation_count(), 2);
        assert_eq!(node.annotations[0].name, "size");
        assert_eq!(node.annotations[0].arg(0), Some(&Value::Int(100)));
        assert_eq!(node.annotations[0].arg(1), Some(&Value::Int(200)));
        assert_eq!(node.annotations[1].name, "visible");
        assert_eq!(node.annotations[1].arg_count(), 0);

        assert_eq!(node.tag_count(), 2);
        assert_eq!(node.tag_at(0), Some("important"));
        assert_eq!(node.tag_at(1), Some("urgent"));

        assert_eq!(node.value.as_str(), Some("task"));
    }

    #[test]
    fn test_interleaved_decorations_preserve_order() {
        let doc = parse("#a @x #b @y 1").unwrap();
        let node = &doc.values[0];
        assert_eq!(node.tags, vec!["a", "b"]);
        assert_eq!(node.annotations[0].name, "x");
        assert_eq!(node.annotations[1].name, "y");
    }

    #[test]
    fn test_annotation_empty_parens() {
        let doc = parse("@cache() 1").unwrap();
        assert_eq!(doc.values[0].annotations[0].arg_count(), 0);
    }

    #[test]
    fn test_annotation_composite_arg() {
        let doc = parse("@meta({ k: 1 }, [2]) null").unwrap();
        let ann = &doc.values[0].annotations[0];
        assert_eq!(ann.arg(0).map(Value::kind), Some(ValueKind::Object));
        assert_eq!(ann.arg(1).map(Value::kind), Some(ValueKind::Array));
    }

    #[test]
    fn test_decorations_inside_containers() {
        let doc = parse("{ admin: #user { id: 1 }, items: [#x 1, #y 2] }").unwrap();
        let root = &doc.values[0].value;
        assert!(root.get("admin").unwrap().has_tag("user"));
        let items = root.get("items").unwrap();
        assert!(items.value.at(0).unwrap().has_tag("x"));
        assert!(items.value.at(1).unwrap().has_tag("y"));
    }

    #[test]
    fn test_decoration_without_value_is_error() {
        assert_eq!(err_kind("#tag"), ErrorKind::Expected);
    }

    #[test]
    fn test_annotation_missing_name() {
        assert_eq!(err_kind("@ 1"), ErrorKind::Expected);
    }

    #[test]
    fn test_annotation_bad_arg_separator() {
        assert_eq!(err_kind("@a(1 : 2) null"), ErrorKind::Expected);
    }

    // ==================== TYPED LITERALS ====================

    #[test]
    fn test_typed_literals_parse() {
        let doc = parse(
            "{ cost: d\"19.99\", at: t\"2025-01-15T10:30:00Z\", ttl: r\"PT30S\",\n\
             id: u\"550e8400-e29b-41d4-a716-446655440000\", blob: b\"aGVsbG8=\" }",
        )
        .unwrap();
        let root = &doc.values[0].value;
        assert_eq!(root.get("cost").unwrap().value, Value::Decimal("19.99".into()));
        assert_eq!(
            root.get("at").unwrap().value,
            Value::DateTime("2025-01-15T10:30:00Z".into())
        );
        assert_eq!(root.get("ttl").unwrap().value, Value::Duration("PT30S".into()));
        assert_eq!(
            root.get("id").unwrap().value.as_str(),
            Some("550e8400-e29b-41d4-a716-446655440000")
        );
        assert_eq!(root.get("blob").unwrap().value.as_bytes(), Some(&b"hello"[..]));
    }

    #[test]
    fn test_decimal_content_is_lenient() {
        let doc = parse("d\"not a number\"").unwrap();
        assert_eq!(doc.values[0].value, Value::Decimal("not a number".into()));
    }

    #[test]
    fn test_invalid_uuid() {
        assert_eq!(err_kind("u\"not-a-uuid\""), ErrorKind::InvalidUuid);
        assert_eq!(
            err_kind("u\"550e8400e29b-41d4-a716-4466554400000\""),
            ErrorKind::InvalidUuid
        );
    }

    #[test]
    fn test_invalid_base64() {
        assert_eq!(err_kind("b\"@@@\""), ErrorKind::InvalidBase64);
    }

    #[test]
    fn test_base64_with_whitespace() {
        let doc = parse("b\"aGVs\\nbG8=\"").unwrap();
        // The \n escape decodes to a newline, which the decoder skips.
        assert_eq!(doc.values[0].value.as_bytes(), Some(&b"hello"[..]));
    }

    #[test]
    fn test_uuid_case_preserved() {
        let doc = parse("u\"550E8400-E29B-41D4-A716-446655440000\"").unwrap();
        assert_eq!(
            doc.values[0].value.as_str(),
            Some("550E8400-E29B-41D4-A716-446655440000")
        );
    }

    // ==================== ERRORS ABORT ====================

    #[test]
    fn test_lexer_error_propagates() {
        assert_eq!(err_kind("{ a: 5e }"), ErrorKind::InvalidNumber);
        assert_eq!(err_kind("{ a: \"open"), ErrorKind::Eof);
        assert_eq!(err_kind("^"), ErrorKind::InvalidToken);
    }

    #[test]
    fn test_error_in_nested_structure() {
        assert_eq!(err_kind("{ a: [1, 2, u\"bad\"] }"), ErrorKind::InvalidUuid);
    }

    // ==================== BOUNDED PARSING ====================

    #[test]
    fn test_parse_bounded() {
        let src = "{ a: 1 } garbage that never lexes %%%";
        let doc = parse_bounded(src, 8).unwrap();
        assert_eq!(doc.values.len(), 1);
        assert_eq!(doc.get_key("a").map(|n| n.value.as_int()), Some(1));
    }

    #[test]
    fn test_parse_bounded_clamps_length() {
        let doc = parse_bounded("42", 100).unwrap();
        assert_eq!(doc.values[0].value.as_int(), 42);
    }

    #[test]
    fn test_parse_bounded_rounds_to_char_boundary() {
        // A 5-byte cut would split the two-byte 'é'; it rounds down to 4.
        let src = "\"caf\u{e9}\"";
        assert_eq!(src.len(), 7);
        let err = parse_bounded(src, 5).unwrap_err();
        // The truncated input has an unterminated string.
        assert_eq!(err.kind, ErrorKind::Eof);
    }
}
