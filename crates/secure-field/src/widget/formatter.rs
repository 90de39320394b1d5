//! Input formatters for text fields.
//!
//! A [`Formatter`] decides whether a candidate string is acceptable content
//! for a field, and may repair content it rejects. Fields consult their
//! formatter whenever content is committed.

use std::fmt;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

/// The result of checking input against a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// The input cannot be made valid by further editing.
    Invalid,
    /// The input is incomplete but could become valid.
    Intermediate,
    /// The input is acceptable as content.
    #[default]
    Acceptable,
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Acceptable => write!(f, "acceptable"),
        }
    }
}

/// Checks and repairs text before it becomes field content.
///
/// Formatters are shared by reference: copying a field's configuration
/// copies the `Arc`, never the formatter itself.
pub trait Formatter: Send + Sync + fmt::Debug {
    /// Validate the candidate content.
    fn validate(&self, input: &str) -> ValidationState;

    /// Attempt to fix content that did not validate as acceptable.
    ///
    /// The default implementation returns `None`, meaning no fixup is possible.
    fn fixup(&self, _input: &str) -> Option<String> {
        None
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }

    fn fixup(&self, input: &str) -> Option<String> {
        (**self).fixup(input)
    }
}

/// Run `input` through `formatter`, returning the content to store.
///
/// Acceptable input is returned as is. Anything else is passed to
/// [`Formatter::fixup`], and the repaired string is used if it validates.
/// `None` means the input must be rejected.
pub fn apply_formatter(formatter: &dyn Formatter, input: &str) -> Option<String> {
    match formatter.validate(input) {
        ValidationState::Acceptable => Some(input.to_owned()),
        _ => formatter
            .fixup(input)
            .filter(|fixed| formatter.validate(fixed) == ValidationState::Acceptable),
    }
}

/// Limits content to a number of user-perceived characters.
///
/// Over-long input is repaired by truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLengthFormatter {
    max_len: usize,
}

impl MaxLengthFormatter {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Formatter for MaxLengthFormatter {
    fn validate(&self, input: &str) -> ValidationState {
        if input.graphemes(true).count() <= self.max_len {
            ValidationState::Acceptable
        } else {
            ValidationState::Invalid
        }
    }

    fn fixup(&self, input: &str) -> Option<String> {
        Some(input.graphemes(true).take(self.max_len).collect())
    }
}

/// Rejects content containing characters outside an allowed predicate.
///
/// Useful for PIN fields (`CharsetFormatter::digits()`).
pub struct CharsetFormatter {
    name: &'static str,
    allowed: fn(char) -> bool,
}

impl CharsetFormatter {
    pub fn new(name: &'static str, allowed: fn(char) -> bool) -> Self {
        Self { name, allowed }
    }

    /// ASCII digits only.
    pub fn digits() -> Self {
        Self::new("digits", |c| c.is_ascii_digit())
    }
}

impl fmt::Debug for CharsetFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharsetFormatter")
            .field("name", &self.name)
            .finish()
    }
}

impl Formatter for CharsetFormatter {
    fn validate(&self, input: &str) -> ValidationState {
        if input.chars().all(self.allowed) {
            ValidationState::Acceptable
        } else {
            ValidationState::Invalid
        }
    }
}
