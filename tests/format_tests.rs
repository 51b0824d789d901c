use kvline::{parse, parse_with_options, serialize, ParseOptions};

#[test]
fn test_whitespace_separators() {
    // Any run of whitespace separates pairs, including tabs and newlines
    for input in [
        "a: \"1\" b: \"2\"",
        "a: \"1\"  b: \"2\"",
        "a: \"1\"\tb: \"2\"",
        "a: \"1\"\nb: \"2\"",
        "a: \"1\" \t \n b: \"2\"",
    ] {
        let doc = parse(input).unwrap();
        assert_eq!(doc.len(), 2, "failed for {:?}", input);
        assert_eq!(doc.get("a"), Some("1"));
        assert_eq!(doc.get("b"), Some("2"));
    }
}

#[test]
fn test_leading_and_trailing_whitespace() {
    let doc = parse("  \t key: \"value\" \n ").unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get("key"), Some("value"));
}

#[test]
fn test_exactly_one_space_after_colon() {
    assert!(parse(r#"key:"value""#).is_err());
    assert!(parse(r#"key:  "value""#).is_err());
    assert!(parse("key:\t\"value\"").is_err());
}

#[test]
fn test_empty_key_rejected() {
    assert!(parse(r#": "value""#).is_err());
}

#[test]
fn test_key_character_set() {
    // Keys admit anything except whitespace and colons
    let doc = parse(r#"user-id_1.x: "v" "quoted": "w""#).unwrap();
    assert_eq!(doc.get("user-id_1.x"), Some("v"));
    assert_eq!(doc.get(r#""quoted""#), Some("w"));
}

#[test]
fn test_empty_value() {
    let doc = parse(r#"key: """#).unwrap();
    assert_eq!(doc.get("key"), Some(""));
}

#[test]
fn test_unterminated_value_rejected() {
    assert!(parse(r#"key: "open"#).is_err());
    // The final quote is escaped, so the value never closes
    assert!(parse(r#"key: "open\""#).is_err());
    assert!(parse(r#"key: "a\\""#).is_err());
}

#[test]
fn test_escape_only_applies_to_quotes() {
    // \" becomes ", every other backslash is literal
    let doc = parse(r#"k: "a\"b""#).unwrap();
    assert_eq!(doc.get("k"), Some(r#"a"b"#));

    let doc = parse(r#"k: "a\nb""#).unwrap();
    assert_eq!(doc.get("k"), Some(r#"a\nb"#));

    let doc = parse(r#"k: "a\b""#).unwrap();
    assert_eq!(doc.get("k"), Some(r#"a\b"#));
}

#[test]
fn test_backslash_backslash_quote() {
    // \\" reads as a literal backslash followed by an escaped quote
    let doc = parse(r#"k: "a\\"b""#).unwrap();
    assert_eq!(doc.get("k"), Some(r#"a\"b"#));
}

#[test]
fn test_value_looking_like_a_pair() {
    let doc = parse(r#"outer: "inner: \"nested\" tail""#).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get("outer"), Some(r#"inner: "nested" tail"#));
}

#[test]
fn test_stray_punctuation_rejected_by_default() {
    assert!(parse(r#"a: "1", b: "2""#).is_err());
    assert!(parse(r#"a: "1"; b: "2""#).is_err());
    assert!(parse(r#"a: "1".b: "2""#).is_err());
}

#[test]
fn test_comma_dialect() {
    let options = ParseOptions::new().with_comma_separators();

    let doc = parse_with_options(r#"a: "1", b: "2""#, options.clone()).unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("b"), Some("2"));

    // Plain whitespace still works in the dialect
    let doc = parse_with_options(r#"a: "1" b: "2""#, options.clone()).unwrap();
    assert_eq!(doc.len(), 2);

    // Comma must be followed by whitespace, and cannot trail the input
    assert!(parse_with_options(r#"a: "1",b: "2""#, options.clone()).is_err());
    assert!(parse_with_options(r#"a: "1","#, options).is_err());
}

#[test]
fn test_comma_in_value_always_fine() {
    let doc = parse(r#"csv: "a,b,c""#).unwrap();
    assert_eq!(doc.get("csv"), Some("a,b,c"));
}

#[test]
fn test_value_with_newline() {
    let doc = parse("k: \"line1\nline2\"").unwrap();
    assert_eq!(doc.get("k"), Some("line1\nline2"));

    let text = serialize(&doc).unwrap();
    assert_eq!(parse(&text).unwrap(), doc);
}

#[test]
fn test_error_reports_position() {
    let err = parse("a: \"1\"\nb: \"2\" oops").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 2"), "unexpected message: {}", msg);
    assert!(msg.contains("oops"), "unexpected message: {}", msg);
}

#[test]
fn test_serialized_form_is_normal() {
    let doc = parse("b: \"2\"\n\na: \"1\"").unwrap();
    assert_eq!(serialize(&doc).unwrap(), r#"b: "2" a: "1""#);
}
