//! Presence validator
//!
//! A value is present when it has at least one character. Whitespace counts
//! as present; trimming is the caller's decision.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::prelude::*;
    ///
    /// assert!(required().validate(" ").is_ok());
    /// assert_eq!(required().validate("").unwrap_err().kind(), ErrorKind::EmptyInput);
    /// ```
    pub Required for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::empty_input() }
    fn required();
}

/// Alias for [`Required`], matching the common `not_empty` vocabulary.
pub type NotEmpty = Required;

/// Creates a `NotEmpty` validator.
#[must_use]
pub const fn not_empty() -> NotEmpty {
    Required
}
