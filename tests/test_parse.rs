use composite_literal::{ParseError, parse_composite_fields, parse_composite_fields_partial};
use indoc::indoc;

fn fields(src: &str) -> Vec<String> {
    match parse_composite_fields(src) {
        Ok(fields) => fields,
        Err(e) => panic!("{}", e.full_message(src)),
    }
}

#[test]
fn test_plain_fields() {
    assert_eq!(fields("(a)"), vec!["a"]);
    assert_eq!(fields("(a,b,c)"), vec!["a", "b", "c"]);
    assert_eq!(fields("(1, 2 ,3)"), vec!["1", " 2 ", "3"]);
    assert_eq!(fields("(52.52,13.405)"), vec!["52.52", "13.405"]);
}

#[test]
fn test_empty_fields() {
    assert_eq!(fields("()"), vec![""]);
    assert_eq!(fields("(,)"), vec!["", ""]);
    assert_eq!(fields("(a,,b,)"), vec!["a", "", "b", ""]);
    assert_eq!(fields(r#"("")"#), vec![""]);
    assert_eq!(fields(r#"("",x)"#), vec!["", "x"]);
}

#[test]
fn test_quoted_fields() {
    assert_eq!(fields(r#"("a""b",c)"#), vec![r#"a"b"#, "c"]);
    assert_eq!(fields(r#"("a,b",c)"#), vec!["a,b", "c"]);
    assert_eq!(fields(r#"("(x)")"#), vec!["(x)"]);
    assert_eq!(fields(r#"("""")"#), vec![r#"""#]);
    assert_eq!(fields(r#"(a,"b")"#), vec!["a", "b"]);
    assert_eq!(fields(r#"("a","b","c")"#), vec!["a", "b", "c"]);
}

#[test]
fn test_backslash_in_quoted_field_is_verbatim() {
    assert_eq!(fields(r#"("a\b")"#), vec![r"a\b"]);
    assert_eq!(fields(r#"("a\",b)"#), vec![r"a\", "b"]);
}

#[test]
fn test_doubled_quote_inside_unquoted_field() {
    assert_eq!(fields(r#"(ab""c)"#), vec![r#"ab"c"#]);
}

#[test]
fn test_backslash_escapes() {
    assert_eq!(
        fields(r#"(a\,b,c\(d\),e\"f)"#),
        vec!["a,b", "c(d)", r#"e"f"#]
    );
    assert_eq!(fields(r"(a\\b)"), vec![r"a\b"]);
    assert_eq!(fields(r"(\))"), vec![")"]);
    assert_eq!(fields(r#"(\"quoted\")"#), vec![r#""quoted""#]);
}

#[test]
fn test_parenthesis_inside_unquoted_field() {
    assert_eq!(fields("((a,b)"), vec!["(a", "b"]);
}

#[test]
fn test_leading_characters_are_skipped() {
    assert_eq!(fields("row(a,b)"), vec!["a", "b"]);
    assert_eq!(fields(r#"  "x",(a)"#), vec!["a"]);
}

#[test]
fn test_multibyte_characters() {
    assert_eq!(fields("(héllo,wörld)"), vec!["héllo", "wörld"]);
    assert_eq!(fields(r#"("🌎,🌍",日本)"#), vec!["🌎,🌍", "日本"]);
}

#[test]
fn test_whitespace_and_newlines_are_field_text() {
    let src = indoc! {"
        (first
        line,second)"};
    assert_eq!(fields(src), vec!["first\nline", "second"]);
}

#[test]
fn test_errors() {
    fn check_error(source: &str, expected: ParseError) {
        let result = parse_composite_fields(source);
        let err = result.unwrap_err();
        // println!("{}", err.full_message(source));
        assert_eq!(
            err, expected,
            "Unexpected error for source `{}`: {:?}",
            source, err
        );
    }

    check_error("", ParseError::EmptyInput);

    // Trailing data after the closing parenthesis
    check_error("(a,b)) ", ParseError::Syntax(Some(5)));
    check_error("(a,b)x", ParseError::Syntax(Some(5)));
    check_error(r#"("a"),"#, ParseError::Syntax(Some(5)));

    // Unterminated literals
    check_error(r#"("abc)"#, ParseError::Syntax(None));
    check_error("(a,b", ParseError::Syntax(None));
    check_error("abc", ParseError::Syntax(None));
    check_error("(", ParseError::Syntax(None));

    // Quote violations
    check_error(r#"("abc""#, ParseError::Syntax(Some(5)));
    check_error(r#"("a"b)"#, ParseError::Syntax(Some(3)));
    check_error(r#"(ab"c)"#, ParseError::Syntax(Some(3)));
    check_error(r#"(ab")"#, ParseError::Syntax(Some(3)));
    check_error(r#"(ab""#, ParseError::Syntax(Some(3)));

    // Dangling escape
    check_error(r"(a\", ParseError::Syntax(Some(2)));
}

#[test]
fn test_error_positions_count_characters() {
    let err = parse_composite_fields("(é,ü)x").unwrap_err();
    assert_eq!(err.position(), Some(5));
    assert!(err.is_syntax());

    let err = parse_composite_fields(r#"("日本"x)"#).unwrap_err();
    assert_eq!(err.position(), Some(4));
}

#[test]
fn test_error_messages() {
    assert_eq!(ParseError::EmptyInput.to_string(), "Empty input");
    assert_eq!(
        ParseError::Syntax(Some(3)).to_string(),
        "Syntax error at position 3"
    );
    assert_eq!(
        ParseError::Syntax(None).to_string(),
        "Syntax error at end of input"
    );
    assert_eq!(ParseError::EmptyInput.position(), None);
}

#[test]
fn test_full_message() {
    let src = "(a,b)x";
    let err = parse_composite_fields(src).unwrap_err();
    let expected = indoc! {"
        line 1: Syntax error at position 5
        (a,b)x
             ^"};
    assert_eq!(err.full_message(src), expected);

    let src = "(a,\nb\"c)";
    let err = parse_composite_fields(src).unwrap_err();
    let expected = indoc! {r#"
        line 2: Syntax error at position 5
        b"c)
         ^"#};
    assert_eq!(err.full_message(src), expected);

    let src = "(abc";
    let err = parse_composite_fields(src).unwrap_err();
    let expected = indoc! {"
        line 1: Syntax error at end of input
        (abc
            ^"};
    assert_eq!(err.full_message(src), expected);
}

#[test]
fn test_parse_partial_basic() {
    let (fields, used) = parse_composite_fields_partial("(a,b) rest").unwrap();
    assert_eq!(fields, vec!["a", "b"]);
    assert_eq!(used, 5);
}

#[test]
fn test_parse_partial_sequence() {
    let src = r#"(1,"x")(2,y)"#;
    let (first, used) = parse_composite_fields_partial(src).unwrap();
    assert_eq!(first, vec!["1", "x"]);
    let (second, rest) = parse_composite_fields_partial(&src[used..]).unwrap();
    assert_eq!(second, vec!["2", "y"]);
    assert_eq!(used + rest, src.len());
}

#[test]
fn test_parse_partial_errors() {
    assert_eq!(
        parse_composite_fields_partial(""),
        Err(ParseError::EmptyInput)
    );
    assert_eq!(
        parse_composite_fields_partial("(a,b"),
        Err(ParseError::Syntax(None))
    );
}
