//! Regional format rules.

use fieldcheck::prelude::*;
use fieldcheck::rules;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("a1b2c3", "A1B2C3")]
#[case("a1b 2c3", "A1B 2C3")]
#[case("K1A-0B1", "K1A-0B1")]
#[case("", "")]
fn postal_code_normalizes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(rules::postal_code(input).unwrap(), expected);
}

#[rstest]
#[case("D1B 2C3")]
#[case("A1B_2C3")]
#[case("A1B 2C")]
#[case("AAA 111")]
#[case("123456")]
fn postal_code_rejects(#[case] input: &str) {
    let err = rules::postal_code(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.field(), Some("Postal code"));
}

#[test]
fn postal_code_no_gap_requires_compact_layout() {
    assert_eq!(rules::postal_code_no_gap("h0h0h0").unwrap(), "H0H0H0");
    assert_eq!(
        rules::postal_code_no_gap("H0H 0H0").unwrap_err().to_string(),
        "Postal code is invalid. Use format 'A1B2C3'."
    );
}

#[rstest]
#[case("a@b.com", true)]
#[case("jane.doe+news@mail.example.ca", true)]
#[case("a@b", false)]
#[case("no-at-sign.com", false)]
#[case("a@b.toolong", false)]
#[case("", true)]
fn email_cases(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(rules::email(input).is_ok(), ok);
}

#[rstest]
#[case("Saint-John", true)]
#[case("Saint-Jean-sur-Richelieu", true)]
#[case("Qu\u{e9}bec", true)]
#[case("John5", false)]
#[case("Halifax!", false)]
#[case("", true)]
fn city_name_cases(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(rules::city_name(input).is_ok(), ok);
}

#[rstest]
#[case("100 Queen St W", true)]
#[case("12-34 Rue Principale", true)]
#[case("Suite #5", false)]
#[case("P.O. Box (7)", false)]
fn street_address_cases(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(rules::street_address(input).is_ok(), ok);
}

#[test]
fn required_variants_reject_empty_with_format_label() {
    let cases = [
        rules::postal_code_required("").map(|_| ()),
        rules::postal_code_no_gap_required("").map(|_| ()),
        rules::street_address_required("").map(|_| ()),
        rules::city_name_required("", LengthBounds::none()).map(|_| ()),
        rules::email_required("", LengthBounds::none()).map(|_| ()),
    ];
    let messages: Vec<String> = cases
        .into_iter()
        .map(|result| result.unwrap_err().to_string())
        .collect();
    assert_eq!(
        messages,
        [
            "Postal code is required.",
            "Postal code is required.",
            "Street address is required.",
            "City name is required.",
            "Email is required.",
        ]
    );
}

#[test]
fn bounded_required_variants() {
    assert_eq!(
        rules::city_name_required("Ottawa", LengthBounds::between(2, 40)).unwrap(),
        "Ottawa"
    );
    assert_eq!(
        rules::email_required("x@y.io", LengthBounds::at_most(5))
            .unwrap_err()
            .to_string(),
        "Email must have a maximum of 5 characters."
    );
}
