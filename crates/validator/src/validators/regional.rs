//! Regional format validators
//!
//! Canadian postal codes, street addresses, city names and email addresses.
//! Every validator here accepts the empty string: presence is checked
//! separately by [`Required`](super::Required).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

// Letters D, F, I, O, Q and U never appear; W and Z never lead.
static POSTAL_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-CEGHJ-NPR-TVXY][0-9][A-CEGHJ-NPR-TV-Z][ -]?[0-9][A-CEGHJ-NPR-TV-Z][0-9]$")
        .unwrap()
});

static POSTAL_CODE_NO_GAP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-CEGHJ-NPR-TVXY][0-9][A-CEGHJ-NPR-TV-Z][0-9][A-CEGHJ-NPR-TV-Z][0-9]$").unwrap()
});

static ADDRESS_SYMBOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*()_]").unwrap());

static CITY_SYMBOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*()_0-9]").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]{1,64}@.{1,250}[.][a-zA-Z]{1,4}$").unwrap());

// ============================================================================
// POSTAL CODE
// ============================================================================

/// Accepted postal code layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostalLayout {
    /// `A1B 2C3`, `A1B-2C3` or `A1B2C3`.
    #[default]
    Any,
    /// `A1B2C3` only.
    NoGap,
}

impl PostalLayout {
    fn regex(self) -> &'static Regex {
        match self {
            Self::Any => &POSTAL_CODE_REGEX,
            Self::NoGap => &POSTAL_CODE_NO_GAP_REGEX,
        }
    }

    const fn hint(self) -> &'static str {
        match self {
            Self::Any => "is invalid. Use format 'A1B 2C3', 'A1B-2C3' or 'A1B2C3'.",
            Self::NoGap => "is invalid. Use format 'A1B2C3'.",
        }
    }
}

crate::validator! {
    /// Validates a Canadian postal code, ignoring letter case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::prelude::*;
    ///
    /// let any = PostalCode::new(PostalLayout::Any);
    /// assert!(any.validate("k1a 0b1").is_ok());
    /// assert!(any.validate("K1A-0B1").is_ok());
    /// assert!(any.validate("").is_ok());
    ///
    /// let compact = PostalCode::new(PostalLayout::NoGap);
    /// assert!(compact.validate("K1A 0B1").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub PostalCode { layout: PostalLayout } for str;
    rule(self, input) {
        input.is_empty() || self.layout.regex().is_match(&input.to_uppercase())
    }
    error(self, input) { ValidationError::invalid_format(self.layout.hint()) }
    fn postal_code(layout: PostalLayout);
}

// ============================================================================
// STREET ADDRESS & CITY
// ============================================================================

crate::validator! {
    /// Rejects the symbols `! @ # $ % ^ & * ( ) _`. Hyphens are fine.
    pub StreetAddress for str;
    rule(input) { !ADDRESS_SYMBOL_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_characters("must not include special characters other than '-'.")
    }
    fn street_address();
}

crate::validator! {
    /// Rejects the street address symbols plus ASCII digits.
    pub CityName for str;
    rule(input) { !CITY_SYMBOL_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_characters(
            "must not include numbers or special characters other than '-'.",
        )
    }
    fn city_name();
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Loose structural email check: a local part of up to 64 characters,
    /// `@`, a domain, and a 1-4 letter top-level suffix.
    pub Email for str;
    rule(input) { input.is_empty() || EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("is not a valid email address.") }
    fn email();
}

// ============================================================================
// FORMAT
// ============================================================================

/// A regional format a field must follow.
///
/// Each format carries its default field label and may normalize the value
/// it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Postal code in the given layout.
    PostalCode(PostalLayout),
    /// Street address.
    StreetAddress,
    /// City name.
    CityName,
    /// Email address.
    Email,
}

impl Format {
    /// Default field label for values in this format.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PostalCode(_) => "Postal code",
            Self::StreetAddress => "Street address",
            Self::CityName => "City name",
            Self::Email => "Email",
        }
    }

    /// Short name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PostalCode(PostalLayout::Any) => "postal_code",
            Self::PostalCode(PostalLayout::NoGap) => "postal_code_no_gap",
            Self::StreetAddress => "street_address",
            Self::CityName => "city_name",
            Self::Email => "email",
        }
    }

    /// Returns the canonical spelling of an accepted value.
    ///
    /// Postal codes are upper-cased with their separator kept; other formats
    /// are returned unchanged.
    pub fn normalize(self, input: &str) -> Cow<'_, str> {
        match self {
            Self::PostalCode(_) if input.chars().any(char::is_lowercase) => {
                Cow::Owned(input.to_uppercase())
            }
            _ => Cow::Borrowed(input),
        }
    }
}

impl Validate for Format {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match *self {
            Self::PostalCode(layout) => PostalCode::new(layout).validate(input),
            Self::StreetAddress => StreetAddress.validate(input),
            Self::CityName => CityName.validate(input),
            Self::Email => Email.validate(input),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
