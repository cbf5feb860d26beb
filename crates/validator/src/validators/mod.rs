//! Built-in validators
//!
//! Ready-to-use validators for form fields. All of them validate `str` and
//! report unlabeled errors.
//!
//! # Categories
//!
//! - **Presence**: required / not empty
//! - **Length**: min, max, exact, and combined [`LengthBounds`]
//! - **Characters**: alphabetic, alphanumeric, regex
//! - **Numeric**: coercion into `i32`, `i64`, `f64` and `Decimal`
//! - **Regional**: postal code, street address, city name, email
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let username = min_length(3).and(max_length(20)).and(alphanumeric());
//! assert!(username.validate("alice42").is_ok());
//!
//! let contact = not_empty().and(email());
//! assert!(contact.validate("").is_err());
//! ```

pub mod length;
pub mod numeric;
pub mod pattern;
pub mod regional;
pub mod required;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{
    ExactLength, LengthBounds, MaxLength, MinLength, exact_length, max_length, min_length,
};
pub use numeric::{Coerce, NumberKind, Numeric, coerce, numeric};
pub use pattern::{
    Alphabetic, Alphanumeric, CharClass, MatchesPattern, alphabetic, alphanumeric, matches_regex,
};
pub use regional::{
    CityName, Email, Format, PostalCode, PostalLayout, StreetAddress, city_name, email,
    postal_code, street_address,
};
pub use required::{NotEmpty, Required, not_empty, required};
