//! LABELED combinator - attaches a field label to errors

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LABELED COMBINATOR
// ============================================================================

/// Attaches a human-readable field label to the errors of a validator.
///
/// A label already set by the inner validator is kept, so the innermost
/// label wins when `Labeled` wrappers are nested.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::combinators::Labeled;
/// use fieldcheck::prelude::*;
///
/// let validator = Labeled::new(not_empty(), "First name");
/// let err = validator.validate("").unwrap_err();
/// assert_eq!(err.to_string(), "First name is required.");
/// ```
#[derive(Debug, Clone)]
pub struct Labeled<V> {
    inner: V,
    field: Cow<'static, str>,
}

impl<V> Labeled<V> {
    /// Wraps `inner` so its errors carry `field`.
    pub fn new(inner: V, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            field: field.into(),
        }
    }

    /// Returns the field label.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Labeled<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|err| err.or_field(self.field.clone()))
    }
}

/// Creates a `Labeled` combinator.
pub fn labeled<V>(validator: V, field: impl Into<Cow<'static, str>>) -> Labeled<V> {
    Labeled::new(validator, field)
}
