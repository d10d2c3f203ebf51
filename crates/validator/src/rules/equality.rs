//! Equality rule

use crate::foundation::{Outcome, Rule, ValidationError, Value, ValueType, WithError};

/// Which comparison must hold for [`EqualityRule`] to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EqualityMode {
    #[default]
    Equal,
    NotEqual,
}

impl EqualityMode {
    fn default_error(self) -> ValidationError {
        match self {
            Self::Equal => ValidationError::NotEqual,
            Self::NotEqual => ValidationError::Equal,
        }
    }
}

/// Compares the input with a captured reference value.
///
/// A value that does not extract as `T` fails with `InvalidType`.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let rule = EqualityRule::new(34_i64);
/// assert!(rule.validate(&Value::Int(34)).is_success());
/// assert_eq!(
///     rule.validate(&Value::Int(664)).errors(),
///     &[ValidationError::NotEqual],
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EqualityRule<T> {
    reference: T,
    mode: EqualityMode,
    error: ValidationError,
}

impl<T: ValueType + PartialEq> EqualityRule<T> {
    /// Passes when the input equals `reference`. Reports `NotEqual`.
    pub fn new(reference: T) -> Self {
        Self::with_mode(reference, EqualityMode::Equal)
    }

    /// Passes when the input differs from `reference`. Reports `Equal`.
    pub fn not_equal_to(reference: T) -> Self {
        Self::with_mode(reference, EqualityMode::NotEqual)
    }

    pub fn with_mode(reference: T, mode: EqualityMode) -> Self {
        Self {
            reference,
            mode,
            error: mode.default_error(),
        }
    }

    pub fn reference(&self) -> &T {
        &self.reference
    }

    pub fn mode(&self) -> EqualityMode {
        self.mode
    }
}

impl<T: ValueType + PartialEq> Rule for EqualityRule<T> {
    fn error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, value: &Value) -> Outcome {
        let Some(candidate) = T::extract(value) else {
            return Outcome::fail_with(value.clone(), [ValidationError::InvalidType]);
        };
        let equal = candidate == self.reference;
        let passed = match self.mode {
            EqualityMode::Equal => equal,
            EqualityMode::NotEqual => !equal,
        };
        if passed {
            Outcome::succeed(value.clone())
        } else {
            Outcome::fail_with(value.clone(), [self.error.clone()])
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        T::extract(value).is_some()
    }

    fn name(&self) -> &str {
        "equality"
    }
}

impl<T: ValueType + PartialEq> WithError for EqualityRule<T> {
    fn with_error(mut self, error: ValidationError) -> Self {
        self.error = error;
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
