//! Inclusive range rule

use crate::foundation::{Outcome, Rule, ValidationError, Value, ValueType, WithError};

/// Passes when `min <= input <= max`.
///
/// Works over any ordered [`ValueType`]: integers, floats, text and, with the
/// `temporal` feature, date-times. One error covers both "too low" and
/// "too high".
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule<T> {
    min: T,
    max: T,
    error: ValidationError,
}

impl<T: ValueType + PartialOrd> RangeRule<T> {
    /// Creates an inclusive range. Reports `ValueOutOfRange`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or the bounds are unordered (NaN).
    pub fn new(min: T, max: T) -> Self {
        assert!(min <= max, "range rule requires min <= max, got {min:?} > {max:?}");
        Self {
            min,
            max,
            error: ValidationError::ValueOutOfRange,
        }
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }
}

impl<T: ValueType + PartialOrd> Rule for RangeRule<T> {
    fn error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, value: &Value) -> Outcome {
        let Some(candidate) = T::extract(value) else {
            return Outcome::fail_with(value.clone(), [ValidationError::InvalidType]);
        };
        if self.min <= candidate && candidate <= self.max {
            Outcome::succeed(value.clone())
        } else {
            Outcome::fail_with(value.clone(), [self.error.clone()])
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        T::extract(value).is_some()
    }

    fn name(&self) -> &str {
        "range"
    }
}

impl<T: ValueType + PartialOrd> WithError for RangeRule<T> {
    fn with_error(mut self, error: ValidationError) -> Self {
        self.error = error;
        self
    }
}
