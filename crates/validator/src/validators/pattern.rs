//! Character-class and pattern validators
//!
//! Letter and digit classification follows Unicode (`char::is_alphabetic`,
//! `char::is_numeric`), so accented and non-Latin letters are accepted.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

crate::validator! {
    /// Validates that a string contains only alphabetic characters.
    pub Alphabetic for str;
    rule(input) { input.chars().all(char::is_alphabetic) }
    error(input) { ValidationError::invalid_characters("must contain only letters.") }
    fn alphabetic();
}

crate::validator! {
    /// Validates that a string contains only letters and digits.
    pub Alphanumeric for str;
    rule(input) { input.chars().all(char::is_alphanumeric) }
    error(input) {
        ValidationError::invalid_characters("must only contain letters and numbers.")
    }
    fn alphanumeric();
}

// ============================================================================
// CHARACTER CLASS
// ============================================================================

/// A character class a field is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Letters only.
    Alphabetic,
    /// Letters and digits.
    Alphanumeric,
}

impl CharClass {
    /// Short name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Alphanumeric => "alphanumeric",
        }
    }
}

impl Validate for CharClass {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self {
            Self::Alphabetic => Alphabetic.validate(input),
            Self::Alphanumeric => Alphanumeric.validate(input),
        }
    }
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is used as given; anchor it with `^…$` for a full match.
    pub MatchesPattern { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("has an invalid format.") }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesPattern {
    /// Wraps an already compiled regex.
    #[must_use]
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }
}
