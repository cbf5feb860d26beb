//! # fieldcheck
//!
//! Composable validation rules for raw form input.
//!
//! Every check takes a raw string and either accepts it (returning the value,
//! normalized or parsed where that makes sense) or fails with a labeled
//! [`ValidationError`](foundation::ValidationError) such as
//! `"Age is required."`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//! use fieldcheck::rules;
//!
//! // Named rules for the common cases
//! assert_eq!(rules::integer_required("42", "Age").unwrap(), 42);
//! assert_eq!(rules::postal_code("k1a 0b1").unwrap(), "K1A 0B1");
//!
//! // Pipelines for anything else
//! let username = Pipeline::new("Username")
//!     .required()
//!     .chars(CharClass::Alphanumeric)
//!     .bounds(LengthBounds::between(3, 20));
//! assert!(username.validate("alice42").is_ok());
//!
//! // Or compose validators directly
//! let code = not_empty().and(exact_length(6)).labeled("Code");
//! assert_eq!(code.validate("").unwrap_err().to_string(), "Code is required.");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Presence**: [`Required`](validators::Required)
//! - **Length**: [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`ExactLength`](validators::ExactLength), [`LengthBounds`](validators::LengthBounds)
//! - **Characters**: [`Alphabetic`](validators::Alphabetic),
//!   [`Alphanumeric`](validators::Alphanumeric), [`MatchesPattern`](validators::MatchesPattern)
//! - **Numeric**: [`Numeric`](validators::Numeric), [`coerce`](validators::coerce)
//! - **Regional**: [`PostalCode`](validators::PostalCode),
//!   [`StreetAddress`](validators::StreetAddress), [`CityName`](validators::CityName),
//!   [`Email`](validators::Email)

// ValidationError is the only error type of every validator; boxing it would
// add an allocation to every failed check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod pipeline;
pub mod prelude;
pub mod rules;
pub mod validators;
