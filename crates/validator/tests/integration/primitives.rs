//! Primitive checks and numeric coercers through the public catalog.

use fieldcheck::prelude::*;
use fieldcheck::rules;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;

// ============================================================================
// LENGTH
// ============================================================================

#[rstest]
#[case("", 0, true)]
#[case("abcde", 5, true)]
#[case("abcd", 5, false)]
#[case("abcdef", 5, false)]
#[case("\u{e9}t\u{e9}", 3, true)]
fn exact_length_cases(#[case] input: &str, #[case] length: usize, #[case] ok: bool) {
    let result = rules::exact_length(input, "Code", length);
    assert_eq!(result.is_ok(), ok);
    if let Err(err) = result {
        assert_eq!(err.kind(), ErrorKind::WrongLength);
        assert_eq!(
            err.to_string(),
            format!("Code must have exactly {length} characters.")
        );
    }
}

#[rstest]
#[case("ab", ErrorKind::TooShort)]
#[case("abcdefghijk", ErrorKind::TooLong)]
fn length_bounds_report_the_violated_side(#[case] input: &str, #[case] kind: ErrorKind) {
    let err = rules::string_required(input, "Name", LengthBounds::between(3, 10)).unwrap_err();
    assert_eq!(err.kind(), kind);
}

#[test]
fn min_and_max_messages() {
    assert_eq!(
        rules::min_length("a", "Password", 8).unwrap_err().to_string(),
        "Password must have a minimum of 8 characters."
    );
    assert_eq!(
        rules::max_length("abcdef", "Initials", 3).unwrap_err().to_string(),
        "Initials must have a maximum of 3 characters."
    );
}

// ============================================================================
// REQUIRED & CHARACTER CLASSES
// ============================================================================

#[rstest]
#[case("", false)]
#[case(" ", true)]
#[case("x", true)]
fn required_cases(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(rules::required(input, "Field").is_ok(), ok);
}

#[rstest]
#[case("Marie", true)]
#[case("Ren\u{e9}e", true)]
#[case("Mary Ann", false)]
#[case("R2D2", false)]
fn alphabetical_only_cases(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(rules::alphabetical_only(input, "Name").is_ok(), ok);
}

#[rstest]
#[case("R2D2", true)]
#[case("R2-D2", false)]
fn alpha_numeric_only_cases(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(rules::alpha_numeric_only(input, "Model").is_ok(), ok);
}

// ============================================================================
// NUMERIC
// ============================================================================

#[rstest]
#[case("", Some(0))]
#[case("42", Some(42))]
#[case("-13", Some(-13))]
#[case("4.2", None)]
#[case("42abc", None)]
#[case(" 42", None)]
fn try_integer_cases(#[case] input: &str, #[case] expected: Option<i32>) {
    let result = rules::try_integer(input, "Quantity");
    match expected {
        Some(value) => assert_eq!(result.unwrap(), value),
        None => assert_eq!(result.unwrap_err().kind(), ErrorKind::NotNumeric),
    }
}

#[rstest]
#[case("", 0.0)]
#[case("3.5", 3.5)]
#[case("-0.25", -0.25)]
#[case("10", 10.0)]
fn try_double_accepts(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(rules::try_double(input, "Rate").unwrap(), expected);
}

#[test]
fn try_double_rejects_non_finite() {
    for input in ["inf", "-inf", "NaN"] {
        let err = rules::try_double(input, "Rate").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Rate must only contain numbers (may include decimal points)."
        );
    }
}

#[test]
fn try_decimal_keeps_scale() {
    let value = rules::try_decimal("12.50", "Price").unwrap();
    assert_eq!(value, Decimal::new(1250, 2));
    assert_eq!(value.to_string(), "12.50");
}

#[test]
fn try_integer64_accepts_beyond_i32() {
    assert_eq!(
        rules::try_integer64("5000000000", "Population").unwrap(),
        5_000_000_000
    );
    assert!(rules::try_integer("5000000000", "Population").is_err());
}

// ============================================================================
// JSON ERRORS
// ============================================================================

#[test]
fn error_renders_as_json() {
    let err = rules::integer_required("", "Age").unwrap_err();
    assert_eq!(
        err.to_json_value(),
        serde_json::json!({
            "code": "empty_input",
            "field": "Age",
            "message": "Age is required.",
        })
    );
}
