//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use std::borrow::Cow;

use crate::combinators::{And, Labeled};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are pure predicates over their input: they either accept it or
/// report a single [`ValidationError`]. They never transform the input;
/// normalization is the job of the [`rules`](crate::rules) catalog and the
/// [`Pipeline`](crate::pipeline::Pipeline).
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::invalid_characters("must not contain spaces."))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a c").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` if the input satisfies the rule.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let username = MinLength::new(3).and(MaxLength::new(12)).labeled("Username");
/// assert!(username.validate("alice").is_ok());
///
/// let err = username.validate("al").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TooShort);
/// assert_eq!(err.to_string(), "Username must have a minimum of 3 characters.");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Attaches a field label to every error this validator reports.
    fn labeled(self, field: impl Into<Cow<'static, str>>) -> Labeled<Self> {
        Labeled::new(self, field)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
