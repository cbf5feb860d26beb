//! Error types for validation failures
//!
//! Every failure carries an [`ErrorKind`] for programmatic branching and a
//! human-readable message of the form `"{label} {constraint}"`, e.g.
//! `"Age is required."`.
//!
//! Validators build errors without a label; the label is attached by whoever
//! knows the field (the [`rules`](crate::rules) catalog, a
//! [`Pipeline`](crate::pipeline::Pipeline), or the
//! [`Labeled`](crate::combinators::Labeled) combinator).
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! labels and constraint phrases never allocates.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Label used in messages when no field label has been attached.
pub const DEFAULT_LABEL: &str = "Value";

// ============================================================================
// ERROR KIND
// ============================================================================

/// The failure taxonomy.
///
/// Each kind maps to exactly one class of violated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required value is missing (zero-length input).
    EmptyInput,
    /// Fewer characters than the minimum length.
    TooShort,
    /// More characters than the maximum length.
    TooLong,
    /// Character count differs from the exact length.
    WrongLength,
    /// A disallowed character class or symbol is present.
    InvalidCharacters,
    /// The value is present but does not match a structural pattern.
    InvalidFormat,
    /// The value could not be parsed as the requested numeric type.
    NotNumeric,
}

impl ErrorKind {
    /// Stable snake_case code for programmatic handling and i18n lookups.
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::WrongLength => "wrong_length",
            Self::InvalidCharacters => "invalid_characters",
            Self::InvalidFormat => "invalid_format",
            Self::NotNumeric => "not_numeric",
        }
    }

    /// Returns true for the three length-bound kinds.
    pub const fn is_length(self) -> bool {
        matches!(self, Self::TooShort | Self::TooLong | Self::WrongLength)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A labeled validation failure.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::too_short(3).with_field("Username");
/// assert_eq!(error.kind, ErrorKind::TooShort);
/// assert_eq!(error.to_string(), "Username must have a minimum of 3 characters.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} {}", .field.as_deref().unwrap_or(DEFAULT_LABEL), .constraint)]
pub struct ValidationError {
    /// Which constraint class was violated.
    pub kind: ErrorKind,

    /// Human-readable field label, if one has been attached.
    pub field: Option<Cow<'static, str>>,

    /// The violated constraint, phrased to follow the label
    /// (e.g. "must have exactly 6 characters.").
    pub constraint: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an unlabeled error.
    pub fn new(kind: ErrorKind, constraint: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            field: None,
            constraint: constraint.into(),
        }
    }

    /// Sets the field label for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the field label only if none is present yet.
    ///
    /// Used by outer layers so that the innermost label wins.
    #[must_use = "builder methods must be chained or built"]
    pub fn or_field(self, field: impl Into<Cow<'static, str>>) -> Self {
        if self.field.is_some() {
            self
        } else {
            self.with_field(field)
        }
    }

    /// Returns the failure kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the attached field label, if any.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the full human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Converts the error to a JSON object for HTTP responses.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.kind,
            "field": self.field,
            "message": self.message(),
        })
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates an "empty_input" error.
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput, "is required.")
    }

    /// Creates a "too_short" error.
    pub fn too_short(min: usize) -> Self {
        Self::new(
            ErrorKind::TooShort,
            format!("must have a minimum of {min} characters."),
        )
    }

    /// Creates a "too_long" error.
    pub fn too_long(max: usize) -> Self {
        Self::new(
            ErrorKind::TooLong,
            format!("must have a maximum of {max} characters."),
        )
    }

    /// Creates a "wrong_length" error.
    pub fn wrong_length(expected: usize) -> Self {
        Self::new(
            ErrorKind::WrongLength,
            format!("must have exactly {expected} characters."),
        )
    }

    /// Creates an "invalid_characters" error.
    pub fn invalid_characters(constraint: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidCharacters, constraint)
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(constraint: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidFormat, constraint)
    }

    /// Creates a "not_numeric" error.
    ///
    /// The message tells the user whether a decimal point is acceptable.
    pub fn not_numeric(decimals_allowed: bool) -> Self {
        Self::new(
            ErrorKind::NotNumeric,
            if decimals_allowed {
                "must only contain numbers (may include decimal points)."
            } else {
                "must only contain numbers with no decimal places or special characters."
            },
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
