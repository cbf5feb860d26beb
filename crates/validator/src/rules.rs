//! Named validation rules for form handlers
//!
//! Free functions that check one raw input and return either the accepted
//! value or a labeled [`ValidationError`]. Every rule is a thin wrapper over
//! a validator type or a [`Pipeline`], so the same checks are available
//! as reusable values.
//!
//! Text rules return the input itself (`&str`), or a [`Cow`] when the value
//! may be normalized. Numeric rules return the parsed number.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::rules;
//! use fieldcheck::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let name = rules::chars_required("Ada", "First name", LengthBounds::at_most(40))?;
//! let age = rules::integer_required("36", "Age")?;
//! let postal = rules::postal_code_required("k1a 0b1")?;
//! assert_eq!((name, age, postal.as_ref()), ("Ada", 36, "K1A 0B1"));
//!
//! let err = rules::email_required("", LengthBounds::none()).unwrap_err();
//! assert_eq!(err.to_string(), "Email is required.");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

use regex::Regex;
use rust_decimal::Decimal;

use crate::foundation::{Validate, ValidationError, ValidationResult};
use crate::pipeline::Pipeline;
use crate::validators::{
    Alphabetic, Alphanumeric, CharClass, CityName, Email, ExactLength, Format, LengthBounds,
    MaxLength, MinLength, NumberKind, PostalLayout, Required, StreetAddress, coerce,
};

fn accept<'a, V>(
    validator: V,
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
) -> ValidationResult<&'a str>
where
    V: Validate<Input = str>,
{
    match validator.validate(input) {
        Ok(()) => Ok(input),
        Err(err) => Err(err.or_field(field)),
    }
}

fn accept_pipeline<'a>(pipeline: &Pipeline, input: &'a str) -> ValidationResult<&'a str> {
    pipeline.validate(input).map(|()| input)
}

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Fails with `EmptyInput` when `input` has no characters.
pub fn required<'a>(input: &'a str, field: impl Into<Cow<'static, str>>) -> ValidationResult<&'a str> {
    accept(Required, input, field)
}

/// Fails with `TooShort` when `input` has fewer than `min` characters.
pub fn min_length<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
    min: usize,
) -> ValidationResult<&'a str> {
    accept(MinLength::new(min), input, field)
}

/// Fails with `TooLong` when `input` has more than `max` characters.
pub fn max_length<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
    max: usize,
) -> ValidationResult<&'a str> {
    accept(MaxLength::new(max), input, field)
}

/// Fails with `WrongLength` unless `input` has exactly `length` characters.
pub fn exact_length<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
    length: usize,
) -> ValidationResult<&'a str> {
    accept(ExactLength::new(length), input, field)
}

/// Fails with `InvalidCharacters` on anything but letters.
pub fn alphabetical_only<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
) -> ValidationResult<&'a str> {
    accept(Alphabetic, input, field)
}

/// Fails with `InvalidCharacters` on anything but letters and digits.
pub fn alpha_numeric_only<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
) -> ValidationResult<&'a str> {
    accept(Alphanumeric, input, field)
}

/// Fails with `InvalidFormat` when `pattern` does not match `input`.
pub fn matches_pattern<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
    pattern: &Regex,
) -> ValidationResult<&'a str> {
    if pattern.is_match(input) {
        Ok(input)
    } else {
        Err(ValidationError::invalid_format("has an invalid format.").with_field(field))
    }
}

// ============================================================================
// NUMERIC COERCERS
// ============================================================================

/// Parses an `i32`; empty input yields `0`.
pub fn try_integer(input: &str, field: impl Into<Cow<'static, str>>) -> ValidationResult<i32> {
    coerce(input).map_err(|err| err.with_field(field))
}

/// Parses an `i64`; empty input yields `0`.
pub fn try_integer64(input: &str, field: impl Into<Cow<'static, str>>) -> ValidationResult<i64> {
    coerce(input).map_err(|err| err.with_field(field))
}

/// Parses a finite `f64`; empty input yields `0.0`.
pub fn try_double(input: &str, field: impl Into<Cow<'static, str>>) -> ValidationResult<f64> {
    coerce(input).map_err(|err| err.with_field(field))
}

/// Parses a [`Decimal`]; empty input yields zero.
pub fn try_decimal(input: &str, field: impl Into<Cow<'static, str>>) -> ValidationResult<Decimal> {
    coerce(input).map_err(|err| err.with_field(field))
}

// ============================================================================
// REGIONAL FORMATS
// ============================================================================

/// Checks a postal code in any layout and returns it upper-cased.
///
/// Empty input is returned as is.
pub fn postal_code(input: &str) -> ValidationResult<Cow<'_, str>> {
    Pipeline::for_format(Format::PostalCode(PostalLayout::Any)).run(input)
}

/// Checks a postal code without separator and returns it upper-cased.
pub fn postal_code_no_gap(input: &str) -> ValidationResult<Cow<'_, str>> {
    Pipeline::for_format(Format::PostalCode(PostalLayout::NoGap)).run(input)
}

/// Checks a street address for disallowed symbols.
pub fn street_address(input: &str) -> ValidationResult<&str> {
    accept(StreetAddress, input, Format::StreetAddress.label())
}

/// Checks a city name for digits and disallowed symbols.
pub fn city_name(input: &str) -> ValidationResult<&str> {
    accept(CityName, input, Format::CityName.label())
}

/// Checks the structure of an email address.
pub fn email(input: &str) -> ValidationResult<&str> {
    accept(Email, input, Format::Email.label())
}

/// Like [`postal_code`], but empty input fails.
pub fn postal_code_required(input: &str) -> ValidationResult<Cow<'_, str>> {
    Pipeline::for_format(Format::PostalCode(PostalLayout::Any))
        .required()
        .run(input)
}

/// Like [`postal_code_no_gap`], but empty input fails.
pub fn postal_code_no_gap_required(input: &str) -> ValidationResult<Cow<'_, str>> {
    Pipeline::for_format(Format::PostalCode(PostalLayout::NoGap))
        .required()
        .run(input)
}

/// Like [`street_address`], but empty input fails.
pub fn street_address_required(input: &str) -> ValidationResult<&str> {
    accept_pipeline(&Pipeline::for_format(Format::StreetAddress).required(), input)
}

/// Like [`city_name`], but empty input fails and `bounds` are enforced.
pub fn city_name_required(input: &str, bounds: LengthBounds) -> ValidationResult<&str> {
    accept_pipeline(
        &Pipeline::for_format(Format::CityName).required().bounds(bounds),
        input,
    )
}

/// Like [`email`], but empty input fails and `bounds` are enforced.
pub fn email_required(input: &str, bounds: LengthBounds) -> ValidationResult<&str> {
    accept_pipeline(
        &Pipeline::for_format(Format::Email).required().bounds(bounds),
        input,
    )
}

// ============================================================================
// COMPOSITES
// ============================================================================

/// Required text within optional length bounds.
pub fn string_required<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
    bounds: LengthBounds,
) -> ValidationResult<&'a str> {
    accept_pipeline(&Pipeline::new(field).required().bounds(bounds), input)
}

/// Required text of exactly `length` characters.
pub fn string_required_exact<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
    length: usize,
) -> ValidationResult<&'a str> {
    accept_pipeline(&Pipeline::new(field).required().exact(length), input)
}

/// Required `i32` of exactly `length` characters, returned as text.
///
/// The validated input is returned unchanged, leading zeros included.
pub fn numeric_required_exact_integer(
    input: &str,
    field: impl Into<Cow<'static, str>>,
    length: usize,
) -> ValidationResult<String> {
    Pipeline::new(field)
        .required()
        .exact(length)
        .numeric(NumberKind::Integer)
        .run(input)
        .map(Cow::into_owned)
}

/// Required `i64` of exactly `length` characters, returned as text.
pub fn numeric_required_exact_integer64(
    input: &str,
    field: impl Into<Cow<'static, str>>,
    length: usize,
) -> ValidationResult<String> {
    Pipeline::new(field)
        .required()
        .exact(length)
        .numeric(NumberKind::Integer64)
        .run(input)
        .map(Cow::into_owned)
}

/// Required letters-only text within optional length bounds.
pub fn chars_required<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
    bounds: LengthBounds,
) -> ValidationResult<&'a str> {
    accept_pipeline(
        &Pipeline::new(field)
            .required()
            .chars(CharClass::Alphabetic)
            .bounds(bounds),
        input,
    )
}

/// Required letters-only text of exactly `length` characters.
///
/// Characters are checked before length, so `"ON1"` with `length` 2 fails
/// with `InvalidCharacters`.
pub fn chars_required_exact<'a>(
    input: &'a str,
    field: impl Into<Cow<'static, str>>,
    length: usize,
) -> ValidationResult<&'a str> {
    accept_pipeline(
        &Pipeline::new(field)
            .required()
            .chars(CharClass::Alphabetic)
            .exact(length),
        input,
    )
}

/// Required `i32`.
pub fn integer_required(input: &str, field: impl Into<Cow<'static, str>>) -> ValidationResult<i32> {
    Pipeline::new(field).required().parse(input)
}

/// Required `i64`.
pub fn integer64_required(
    input: &str,
    field: impl Into<Cow<'static, str>>,
) -> ValidationResult<i64> {
    Pipeline::new(field).required().parse(input)
}

/// Required finite `f64`.
pub fn double_required(input: &str, field: impl Into<Cow<'static, str>>) -> ValidationResult<f64> {
    Pipeline::new(field).required().parse(input)
}

/// Required [`Decimal`].
pub fn decimal_required(
    input: &str,
    field: impl Into<Cow<'static, str>>,
) -> ValidationResult<Decimal> {
    Pipeline::new(field).required().parse(input)
}

// ============================================================================
// TESTS
// ============================================================================
