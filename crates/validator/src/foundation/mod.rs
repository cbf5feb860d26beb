//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ErrorKind`
//!
//! # Architecture
//!
//! ## 1. Pure predicates
//!
//! Validators only inspect their input. Normalized output (upper-cased postal
//! codes, parsed numbers) is produced one level up, by the rule catalog and
//! the pipeline.
//!
//! ## 2. Composition
//!
//! Validators compose with short-circuiting AND; the first failure wins and
//! is propagated untouched:
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let validator = not_empty().and(exact_length(6));
//! assert_eq!(validator.validate("").unwrap_err().kind(), ErrorKind::EmptyInput);
//! ```
//!
//! ## 3. Labels are late-bound
//!
//! Errors are created without a field label and labeled by the caller that
//! knows the field:
//!
//! ```rust
//! use fieldcheck::foundation::ValidationError;
//!
//! let error = ValidationError::empty_input().with_field("Email");
//! assert_eq!(error.to_string(), "Email is required.");
//! ```

pub mod error;
pub mod traits;

pub use error::{DEFAULT_LABEL, ErrorKind, ValidationError};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a single validator.
///
/// This is a convenience function for one-off validations.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> Result<(), ValidationError>
where
    V: Validate,
{
    validator.validate(value)
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
