//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in the
//! traits, error types, validators, combinators and the pipeline builder.
//!
//! The function catalog in [`rules`](crate::rules) is not re-exported; its
//! names (`required`, `min_length`, ...) overlap with the validator
//! factories. Use it through its module path.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! let age = Pipeline::new("Age").required();
//!
//! assert!(username.validate("alice").is_ok());
//! assert_eq!(age.parse::<i32>("30").unwrap(), 30);
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{ErrorKind, Validate, ValidateExt, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS & PIPELINE
// ============================================================================

pub use crate::combinators::{And, AndAll, Labeled, and, and_all, labeled};
pub use crate::pipeline::{Pipeline, Stage};
