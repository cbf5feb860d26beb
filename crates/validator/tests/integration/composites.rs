//! Composite rules and custom pipelines.

use fieldcheck::prelude::*;
use fieldcheck::rules;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;

#[rstest]
#[case("", ErrorKind::EmptyInput)]
#[case("12345", ErrorKind::WrongLength)]
#[case("1234567", ErrorKind::WrongLength)]
#[case("12a456", ErrorKind::NotNumeric)]
fn numeric_exact_integer_reports_first_failure(#[case] input: &str, #[case] kind: ErrorKind) {
    let err = rules::numeric_required_exact_integer(input, "Student number", 6).unwrap_err();
    assert_eq!(err.kind(), kind);
    assert_eq!(err.field(), Some("Student number"));
}

#[test]
fn numeric_exact_returns_input_text() {
    assert_eq!(
        rules::numeric_required_exact_integer("000123", "Student number", 6).unwrap(),
        "000123"
    );
    assert_eq!(
        rules::numeric_required_exact_integer64("-9000000000", "Ledger", 11).unwrap(),
        "-9000000000"
    );
}

#[rstest]
#[case("", ErrorKind::EmptyInput)]
#[case("J0hn", ErrorKind::InvalidCharacters)]
#[case("J", ErrorKind::TooShort)]
#[case("Bartholomew", ErrorKind::TooLong)]
fn chars_required_order(#[case] input: &str, #[case] kind: ErrorKind) {
    let err = rules::chars_required(input, "First name", LengthBounds::between(2, 10)).unwrap_err();
    assert_eq!(err.kind(), kind);
}

#[test]
fn chars_required_exact() {
    assert_eq!(rules::chars_required_exact("QC", "Province", 2).unwrap(), "QC");
    assert_eq!(
        rules::chars_required_exact("Q1", "Province", 2)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidCharacters
    );
}

#[test]
fn chars_required_exact_checks_characters_before_length() {
    // Both stages fail here; the character class runs first.
    let err = rules::chars_required_exact("ON1", "Province", 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacters);
    assert_eq!(err.to_string(), "Province must contain only letters.");
}

#[test]
fn string_required_exact() {
    assert_eq!(rules::string_required_exact("A-1", "Unit", 3).unwrap(), "A-1");
    assert_eq!(
        rules::string_required_exact("", "Unit", 3).unwrap_err().kind(),
        ErrorKind::EmptyInput
    );
}

#[test]
fn typed_required_rules() {
    assert_eq!(rules::integer_required("-5", "Offset").unwrap(), -5);
    assert_eq!(rules::integer64_required("5", "Offset").unwrap(), 5);
    assert_eq!(rules::double_required("0.5", "Ratio").unwrap(), 0.5);
    assert_eq!(
        rules::decimal_required("99.95", "Price").unwrap(),
        Decimal::new(9995, 2)
    );
    assert_eq!(
        rules::double_required("half", "Ratio").unwrap_err().kind(),
        ErrorKind::NotNumeric
    );
}

// ============================================================================
// PIPELINES
// ============================================================================

#[test]
fn pipeline_matches_composite_rule() {
    let pipeline = Pipeline::new("Student number")
        .numeric(NumberKind::Integer)
        .exact(6)
        .required();
    for input in ["", "12345", "12a456", "000123"] {
        assert_eq!(
            pipeline.run(input).map(|text| text.into_owned()),
            rules::numeric_required_exact_integer(input, "Student number", 6)
        );
    }
}

#[test]
fn pipeline_from_config() {
    let bounds: LengthBounds = serde_json::from_str(r#"{"min": 2, "max": 5}"#).unwrap();
    let class: CharClass = serde_json::from_str(r#""alphanumeric""#).unwrap();
    let pipeline = Pipeline::new("Tag").required().chars(class).bounds(bounds);
    assert_eq!(
        pipeline.stages(),
        vec![
            Stage::Required,
            Stage::Chars(CharClass::Alphanumeric),
            Stage::Min(2),
            Stage::Max(5),
        ]
    );
    assert!(pipeline.validate("rust").is_ok());
    assert_eq!(
        pipeline.validate("rust-lang").unwrap_err().kind(),
        ErrorKind::InvalidCharacters
    );
}

#[test]
fn pipeline_composes_with_combinators() {
    let pipeline = Pipeline::new("Code").required();
    let combined = pipeline.and(exact_length(4));
    let err = combined.validate("abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongLength);
    assert_eq!(err.field(), None);

    let labeled = Pipeline::new("Code").required().and(exact_length(4)).labeled("Code");
    assert_eq!(labeled.validate("abc").unwrap_err().field(), Some("Code"));
}
