use jsonatom::{parse, validate_str, ParseError, Value};
use rstest::rstest;

#[rstest]
#[case("")]
#[case(" ")]
#[case(" \t\n\r")]
fn blank_input_expects_value(#[case] input: &str) {
    assert_eq!(parse(input), Err(ParseError::ExpectValue));
}

#[rstest]
#[case("truex")]
#[case("null x")]
#[case("false true")]
#[case("1 2")]
#[case("0 0")]
#[case("-1.5e3 null")]
#[case("0 .")]
fn trailing_content_is_not_singular(#[case] input: &str) {
    assert_eq!(parse(input), Err(ParseError::RootNotSingular));
}

#[rstest]
#[case("true", true)]
#[case(" -0.5e2 ", true)]
#[case("null", true)]
#[case("", false)]
#[case("01", false)]
#[case("1 2", false)]
fn validate_matches_parse(#[case] input: &str, #[case] valid: bool) {
    let result = validate_str(input);
    if valid {
        assert!(result.is_ok());
    } else {
        assert!(result.is_err());
    }
}

#[test]
fn whitespace_around_value_is_ignored() {
    assert_eq!(parse(" \t\r\n 42 \n\r\t "), Ok(Value::Number(42.0)));
}

#[test]
fn reparse_is_stable() {
    for input in ["true", "-1.5e3", "  null ", "01", "1 2", "", "1e400"] {
        assert_eq!(parse(input), parse(input));
    }
}
