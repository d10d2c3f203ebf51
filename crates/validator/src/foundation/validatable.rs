//! Values that can be checked against rule lists

use crate::foundation::{Outcome, Rule, Value, satisfy_all, satisfy_any};
use crate::rules::PaymentCardType;

/// A value that knows how to present itself for validation.
///
/// Implemented for primitives, strings, vectors, [`Value`] and
/// [`PaymentCardType`]; form fields use the same folds through their input
/// source.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let outcome = "HelloMister".satisfy_all(&[
///     StringLengthRule::min(10),
///     StringLengthRule::max(50),
/// ]);
/// assert!(outcome.is_success());
/// ```
pub trait Validatable {
    /// The value handed to rules.
    fn input_value(&self) -> Value;

    /// Succeeds only if every rule succeeds. See [`satisfy_all`].
    fn satisfy_all<R: Rule>(&self, rules: &[R]) -> Outcome {
        satisfy_all(self.input_value(), rules)
    }

    /// Succeeds as soon as one rule succeeds. See [`satisfy_any`].
    fn satisfy_any<R: Rule>(&self, rules: &[R]) -> Outcome {
        satisfy_any(self.input_value(), rules)
    }
}

macro_rules! impl_validatable {
    ($($ty:ty),* $(,)?) => {$(
        impl Validatable for $ty {
            fn input_value(&self) -> Value {
                Value::from(self.clone())
            }
        }
    )*};
}

impl_validatable!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    char,
    String,
    Value,
    PaymentCardType,
);

impl Validatable for str {
    fn input_value(&self) -> Value {
        Value::from(self)
    }
}

impl<T: Clone + Into<Value>> Validatable for Vec<T> {
    fn input_value(&self) -> Value {
        Value::from(self.clone())
    }
}

impl<T: Clone + Into<Value>> Validatable for Option<T> {
    fn input_value(&self) -> Value {
        Value::from(self.clone())
    }
}

#[cfg(feature = "temporal")]
impl Validatable for chrono::DateTime<chrono::Utc> {
    fn input_value(&self) -> Value {
        Value::from(*self)
    }
}
