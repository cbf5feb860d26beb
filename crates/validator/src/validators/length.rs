//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has
//! length 5 even though it is 6 bytes long.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::too_short(self.min) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { ValidationError::too_long(self.max) }
    fn max_length(max: usize);
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { char_len(input) == self.length }
    error(self, input) { ValidationError::wrong_length(self.length) }
    fn exact_length(length: usize);
}

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

/// Optional length bounds for a single field.
///
/// Every bound is optional; unset bounds are not checked. When several are
/// set they are checked in the order exact, min, max and the first violation
/// is reported.
///
/// Derives `Deserialize` so bounds can live in an application's own settings.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let bounds = LengthBounds::between(2, 30);
/// assert!(bounds.validate("Toronto").is_ok());
/// assert_eq!(bounds.validate("T").unwrap_err().kind(), ErrorKind::TooShort);
///
/// assert!(LengthBounds::default().validate("").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LengthBounds {
    /// Minimum length (inclusive).
    pub min: Option<usize>,
    /// Maximum length (inclusive).
    pub max: Option<usize>,
    /// Exact length.
    pub exact: Option<usize>,
}

impl LengthBounds {
    /// No bounds at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            min: None,
            max: None,
            exact: None,
        }
    }

    /// Only a minimum length.
    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self {
            min: Some(min),
            ..Self::none()
        }
    }

    /// Only a maximum length.
    #[must_use]
    pub const fn at_most(max: usize) -> Self {
        Self {
            max: Some(max),
            ..Self::none()
        }
    }

    /// Inclusive `[min, max]` range.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            exact: None,
        }
    }

    /// Only an exact length.
    #[must_use]
    pub const fn exactly(length: usize) -> Self {
        Self {
            exact: Some(length),
            ..Self::none()
        }
    }

    /// Returns true if no bound is set.
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.exact.is_none()
    }

    /// Overlays `other` on top of `self`; bounds set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: other.min.or(self.min),
            max: other.max.or(self.max),
            exact: other.exact.or(self.exact),
        }
    }
}

impl Validate for LengthBounds {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.is_unbounded() {
            return Ok(());
        }
        let len = char_len(input);
        if let Some(exact) = self.exact
            && len != exact
        {
            return Err(ValidationError::wrong_length(exact));
        }
        if let Some(min) = self.min
            && len < min
        {
            return Err(ValidationError::too_short(min));
        }
        if let Some(max) = self.max
            && len > max
        {
            return Err(ValidationError::too_long(max));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
