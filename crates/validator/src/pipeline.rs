//! Declarative validation pipelines
//!
//! A [`Pipeline`] collects the checks for one field and runs them in a fixed
//! canonical order, whatever order the builder methods were called in:
//!
//! ```text
//! required → format → character class → exact length → min length → max length → numeric
//! ```
//!
//! The first failing stage aborts the run and its error is returned, labeled
//! with the pipeline's field name.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let postal = Pipeline::new("Postal code")
//!     .format(Format::PostalCode(PostalLayout::Any))
//!     .required();
//!
//! assert_eq!(postal.run("k1a 0b1").unwrap(), "K1A 0B1");
//!
//! let err = postal.run("").unwrap_err();
//! assert_eq!(err.to_string(), "Postal code is required.");
//! ```

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError, ValidationResult};
use crate::validators::{
    CharClass, Coerce, ExactLength, Format, LengthBounds, MaxLength, MinLength, NumberKind,
    Numeric, Required, coerce,
};

// ============================================================================
// STAGE
// ============================================================================

/// One check in a pipeline.
///
/// The variant order is the evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Input must be non-empty.
    Required,
    /// Input must follow a regional format.
    Format(Format),
    /// Input must consist of a character class.
    Chars(CharClass),
    /// Input must have exactly this many characters.
    Exact(usize),
    /// Input must have at least this many characters.
    Min(usize),
    /// Input must have at most this many characters.
    Max(usize),
    /// Input must coerce into a number.
    Numeric(NumberKind),
}

impl Stage {
    /// Short name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Format(format) => format.name(),
            Self::Chars(class) => class.name(),
            Self::Exact(_) => "exact_length",
            Self::Min(_) => "min_length",
            Self::Max(_) => "max_length",
            Self::Numeric(kind) => kind.name(),
        }
    }
}

impl Validate for Stage {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match *self {
            Self::Required => Required.validate(input),
            Self::Format(format) => format.validate(input),
            Self::Chars(class) => class.validate(input),
            Self::Exact(length) => ExactLength::new(length).validate(input),
            Self::Min(min) => MinLength::new(min).validate(input),
            Self::Max(max) => MaxLength::new(max).validate(input),
            Self::Numeric(kind) => Numeric::new(kind).validate(input),
        }
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// The checks for a single labeled field.
///
/// Each slot holds at most one stage; calling a builder method twice
/// replaces the earlier setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    field: Cow<'static, str>,
    required: bool,
    format: Option<Format>,
    chars: Option<CharClass>,
    bounds: LengthBounds,
    numeric: Option<NumberKind>,
}

impl Pipeline {
    /// Creates an empty pipeline for the given field label.
    pub fn new(field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            required: false,
            format: None,
            chars: None,
            bounds: LengthBounds::none(),
            numeric: None,
        }
    }

    /// Creates a pipeline checking `format`, labeled with the format's
    /// default label.
    pub fn for_format(format: Format) -> Self {
        Self::new(format.label()).format(format)
    }

    /// Rejects empty input.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires a regional format.
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Restricts input to a character class.
    #[must_use = "builder methods must be chained or built"]
    pub fn chars(mut self, class: CharClass) -> Self {
        self.chars = Some(class);
        self
    }

    /// Overlays length bounds; bounds set here replace earlier ones.
    #[must_use = "builder methods must be chained or built"]
    pub fn bounds(mut self, bounds: LengthBounds) -> Self {
        self.bounds = self.bounds.merge(bounds);
        self
    }

    /// Requires an exact length.
    #[must_use = "builder methods must be chained or built"]
    pub fn exact(mut self, length: usize) -> Self {
        self.bounds.exact = Some(length);
        self
    }

    /// Requires a minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Requires a maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Requires the input to coerce into a number.
    #[must_use = "builder methods must be chained or built"]
    pub fn numeric(mut self, kind: NumberKind) -> Self {
        self.numeric = Some(kind);
        self
    }

    /// Returns the field label.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the stages in evaluation order.
    pub fn stages(&self) -> Vec<Stage> {
        self.iter_stages().collect()
    }

    fn iter_stages(&self) -> impl Iterator<Item = Stage> {
        self.required
            .then_some(Stage::Required)
            .into_iter()
            .chain(self.format.map(Stage::Format))
            .chain(self.chars.map(Stage::Chars))
            .chain(self.bounds.exact.map(Stage::Exact))
            .chain(self.bounds.min.map(Stage::Min))
            .chain(self.bounds.max.map(Stage::Max))
            .chain(self.numeric.map(Stage::Numeric))
    }

    fn check(&self, input: &str, stages: impl Iterator<Item = Stage>) -> ValidationResult<()> {
        for stage in stages {
            if let Err(err) = stage.validate(input) {
                tracing::trace!(
                    field = %self.field,
                    stage = stage.name(),
                    code = err.kind.code(),
                    "validation stage failed"
                );
                return Err(err.or_field(self.field.clone()));
            }
        }
        Ok(())
    }

    /// Runs every stage and returns the accepted text.
    ///
    /// With a format stage the text is normalized by the format; otherwise
    /// it is the input itself. A numeric stage only checks that the text
    /// parses, so `"007"` stays `"007"` and the output always passes the
    /// same pipeline again. Use [`parse`](Self::parse) for the number.
    pub fn run<'a>(&self, input: &'a str) -> ValidationResult<Cow<'a, str>> {
        self.check(input, self.iter_stages())?;
        Ok(match self.format {
            Some(format) => format.normalize(input),
            None => Cow::Borrowed(input),
        })
    }

    /// Runs the text stages, then coerces the input into `T`.
    ///
    /// A numeric stage set on the pipeline is replaced by `T`'s own parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::prelude::*;
    ///
    /// let age = Pipeline::new("Age").required();
    /// assert_eq!(age.parse::<i32>("42").unwrap(), 42);
    /// assert_eq!(age.parse::<i32>("4.2").unwrap_err().kind(), ErrorKind::NotNumeric);
    /// ```
    pub fn parse<T: Coerce>(&self, input: &str) -> ValidationResult<T> {
        let text_stages = self
            .iter_stages()
            .filter(|stage| !matches!(stage, Stage::Numeric(_)));
        self.check(input, text_stages)?;
        coerce::<T>(input).map_err(|err| {
            tracing::trace!(
                field = %self.field,
                stage = T::KIND.name(),
                code = err.kind.code(),
                "validation stage failed"
            );
            err.or_field(self.field.clone())
        })
    }
}

impl Validate for Pipeline {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.check(input, self.iter_stages())
    }
}

// ============================================================================
// TESTS
// ============================================================================
