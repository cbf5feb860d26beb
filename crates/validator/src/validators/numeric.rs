//! Numeric coercion
//!
//! Coercers both validate and convert a string into a number. Two policies
//! apply to every target type:
//!
//! - the empty string means "unset" and yields the zero of the type;
//! - anything else must parse in full with the type's standard `FromStr`
//!   grammar. There is no trimming, rounding or partial parse.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::foundation::{ValidationError, ValidationResult};

// ============================================================================
// NUMBER KIND
// ============================================================================

/// The numeric type a field is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    /// 32-bit signed integer (`i32`).
    Integer,
    /// 64-bit signed integer (`i64`).
    Integer64,
    /// Double-precision float (`f64`).
    Double,
    /// Arbitrary-precision decimal ([`Decimal`]).
    Decimal,
}

impl NumberKind {
    /// Whether the grammar of this kind accepts a decimal point.
    pub const fn allows_decimals(self) -> bool {
        matches!(self, Self::Double | Self::Decimal)
    }

    /// Short name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Integer64 => "integer64",
            Self::Double => "double",
            Self::Decimal => "decimal",
        }
    }

    /// Returns true if `input` would coerce successfully.
    pub fn accepts(self, input: &str) -> bool {
        match self {
            Self::Integer => coerce::<i32>(input).is_ok(),
            Self::Integer64 => coerce::<i64>(input).is_ok(),
            Self::Double => coerce::<f64>(input).is_ok(),
            Self::Decimal => coerce::<Decimal>(input).is_ok(),
        }
    }
}

// ============================================================================
// COERCE TRAIT
// ============================================================================

/// A numeric type a field can be coerced into.
pub trait Coerce: Sized + Display {
    /// The kind this type represents.
    const KIND: NumberKind;

    /// The value an empty input maps to.
    fn zero() -> Self;

    /// Parses the whole input, or returns `None`.
    fn parse_exact(input: &str) -> Option<Self>;
}

impl Coerce for i32 {
    const KIND: NumberKind = NumberKind::Integer;

    fn zero() -> Self {
        0
    }

    fn parse_exact(input: &str) -> Option<Self> {
        input.parse().ok()
    }
}

impl Coerce for i64 {
    const KIND: NumberKind = NumberKind::Integer64;

    fn zero() -> Self {
        0
    }

    fn parse_exact(input: &str) -> Option<Self> {
        input.parse().ok()
    }
}

impl Coerce for f64 {
    const KIND: NumberKind = NumberKind::Double;

    fn zero() -> Self {
        0.0
    }

    // `inf`, `NaN` and overflowing literals are valid `f64` syntax but never
    // a meaningful form value.
    fn parse_exact(input: &str) -> Option<Self> {
        input.parse::<Self>().ok().filter(|n| n.is_finite())
    }
}

impl Coerce for Decimal {
    const KIND: NumberKind = NumberKind::Decimal;

    fn zero() -> Self {
        Self::ZERO
    }

    // The parser skips `_` digit separators. `from_str_exact` fails instead
    // of rounding when the input has more than 28 fractional digits.
    fn parse_exact(input: &str) -> Option<Self> {
        if input.contains('_') {
            return None;
        }
        Self::from_str_exact(input).ok()
    }
}

/// Coerces `input` into `T`, mapping the empty string to zero.
///
/// The returned error is unlabeled.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::validators::coerce;
///
/// assert_eq!(coerce::<i32>("").unwrap(), 0);
/// assert_eq!(coerce::<i64>("-42").unwrap(), -42);
/// assert!(coerce::<i32>("4.2").is_err());
/// assert_eq!(coerce::<f64>("4.2").unwrap(), 4.2);
/// ```
pub fn coerce<T: Coerce>(input: &str) -> ValidationResult<T> {
    if input.is_empty() {
        return Ok(T::zero());
    }
    T::parse_exact(input).ok_or_else(|| ValidationError::not_numeric(T::KIND.allows_decimals()))
}

// ============================================================================
// NUMERIC VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string coerces into the given number kind.
    ///
    /// Follows the coercion policy, so the empty string passes.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Numeric { kind: NumberKind } for str;
    rule(self, input) { self.kind.accepts(input) }
    error(self, input) { ValidationError::not_numeric(self.kind.allows_decimals()) }
    fn numeric(kind: NumberKind);
}

// ============================================================================
// TESTS
// ============================================================================
