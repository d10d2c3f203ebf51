//! Validation outcomes
//!
//! An [`Outcome`] is what every rule and every combinator step produces: a
//! status, the errors gathered so far, and the value being carried forward.
//! Combinators consume an outcome and return a new one; nothing is mutated
//! behind the caller's back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::foundation::{ValidationError, Value};

/// Inline capacity of an outcome's error list; most failures carry one or two.
pub type Errors = SmallVec<[ValidationError; 2]>;

/// Whether a validation step passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Failure,
}

/// Result of a validation step.
///
/// `value` holds the most recent meaningful value: the value that passed on
/// success, or the rejected input (or a rule-supplied substitute such as a
/// guessed card type) on failure.
///
/// A single rule always produces `Failure` with at least one error, or
/// `Success` with none. The one exception is [`Outcome::or`], which keeps the
/// errors gathered before the first passing rule next to a `Success` status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<V = Value> {
    status: Status,
    errors: Errors,
    value: V,
}

impl<V> Outcome<V> {
    /// A passing outcome with no errors.
    pub fn succeed(value: impl Into<V>) -> Self {
        Self {
            status: Status::Success,
            errors: Errors::new(),
            value: value.into(),
        }
    }

    /// A failing outcome with no errors yet, the seed of an OR fold.
    pub fn fail(value: impl Into<V>) -> Self {
        Self {
            status: Status::Failure,
            errors: Errors::new(),
            value: value.into(),
        }
    }

    /// A failing outcome carrying `errors` in order.
    pub fn fail_with(
        value: impl Into<V>,
        errors: impl IntoIterator<Item = ValidationError>,
    ) -> Self {
        Self {
            status: Status::Failure,
            errors: errors.into_iter().collect(),
            value: value.into(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_failure(&self) -> bool {
        self.status == Status::Failure
    }

    /// Errors in the order they were reported. Empty means "no errors".
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn into_parts(self) -> (Status, Errors, V) {
        (self.status, self.errors, self.value)
    }

    /// Replaces the carried value, keeping status and errors.
    #[must_use = "outcome is returned, not modified in place"]
    pub fn with_value(self, value: V) -> Self {
        Self { value, ..self }
    }

    /// Maps the carried value, keeping status and errors.
    pub fn map_value<W>(self, f: impl FnOnce(V) -> W) -> Outcome<W> {
        Outcome {
            status: self.status,
            errors: self.errors,
            value: f(self.value),
        }
    }

    /// Converts into a std `Result`, dropping the value on failure.
    pub fn into_result(self) -> Result<V, Errors> {
        match self.status {
            Status::Success => Ok(self.value),
            Status::Failure => Err(self.errors),
        }
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn extend_errors(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    pub(crate) fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
