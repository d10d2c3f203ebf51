//! Core traits for the validation system
//!
//! [`Rule`] is the capability every concrete rule implements. It is object
//! safe so heterogeneous rule lists can be stored as `Vec<Arc<dyn Rule>>`.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Outcome, ValidationError, Value};

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A single, reusable, stateless test over a [`Value`].
///
/// `validate` is total: it never panics on user input and always returns an
/// [`Outcome`]. A value of the wrong kind yields a failure with exactly
/// `[ValidationError::InvalidType]` and the original value.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// #[derive(Debug)]
/// struct IsTrue {
///     error: ValidationError,
/// }
///
/// impl Rule for IsTrue {
///     fn error(&self) -> &ValidationError {
///         &self.error
///     }
///
///     fn validate(&self, value: &Value) -> Outcome {
///         match value.as_bool() {
///             Some(true) => Outcome::succeed(value.clone()),
///             Some(false) => Outcome::fail_with(value.clone(), [self.error.clone()]),
///             None => Outcome::fail_with(value.clone(), [ValidationError::InvalidType]),
///         }
///     }
/// }
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// The error reported when the rule rejects a value.
    fn error(&self) -> &ValidationError;

    /// Validates `value`.
    fn validate(&self, value: &Value) -> Outcome;

    /// Whether the value's kind is one this rule can judge.
    ///
    /// Returning `false` means `validate` would report `InvalidType`.
    fn accepts(&self, value: &Value) -> bool {
        let _ = value;
        true
    }

    /// Human-readable rule name used in log fields.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn error(&self) -> &ValidationError {
        (**self).error()
    }

    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }

    fn accepts(&self, value: &Value) -> bool {
        (**self).accepts(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn error(&self) -> &ValidationError {
        (**self).error()
    }

    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }

    fn accepts(&self, value: &Value) -> bool {
        (**self).accepts(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn error(&self) -> &ValidationError {
        (**self).error()
    }

    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }

    fn accepts(&self, value: &Value) -> bool {
        (**self).accepts(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// ERROR REPLACEMENT
// ============================================================================

/// Replaces the error a rule reports, returning the modified rule.
pub trait WithError: Rule + Sized {
    #[must_use = "builder methods must be chained or built"]
    fn with_error(self, error: ValidationError) -> Self;

    /// Shorthand for `with_error(ValidationError::custom(message))`.
    #[must_use = "builder methods must be chained or built"]
    fn with_message(self, message: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        self.with_error(ValidationError::custom(message))
    }
}

// ============================================================================
// TESTS
// ============================================================================
