//! Validator combinators
//!
//! - [`And`] / [`AndAll`] - short-circuiting conjunction
//! - [`Labeled`] - attaches a field label to reported errors

pub mod and;
pub mod labeled;

pub use and::{And, AndAll, and, and_all};
pub use labeled::{Labeled, labeled};
