//! Match against another input's live value

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Outcome, Rule, ValidationError, Value, WithError};
use crate::form::InputSource;

/// Passes when the input text equals the current text of another source,
/// as in "confirm password equals password".
///
/// The other source is read on every validation, never snapshotted. Either
/// side not being text fails with `InvalidType`.
#[derive(Clone)]
pub struct StringValueMatchRule {
    base: Arc<dyn InputSource>,
    error: ValidationError,
}

impl StringValueMatchRule {
    /// Reports `NotEqual`.
    pub fn new(base: impl InputSource + 'static) -> Self {
        Self::shared(Arc::new(base))
    }

    /// Uses an already shared source.
    pub fn shared(base: Arc<dyn InputSource>) -> Self {
        Self {
            base,
            error: ValidationError::NotEqual,
        }
    }
}

impl fmt::Debug for StringValueMatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringValueMatchRule")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl Rule for StringValueMatchRule {
    fn error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, value: &Value) -> Outcome {
        let base = self.base.input_value();
        let (Some(expected), Some(candidate)) = (base.as_str(), value.as_str()) else {
            return Outcome::fail_with(value.clone(), [ValidationError::InvalidType]);
        };
        if expected == candidate {
            Outcome::succeed(value.clone())
        } else {
            Outcome::fail_with(value.clone(), [self.error.clone()])
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        value.as_str().is_some()
    }

    fn name(&self) -> &str {
        "string_value_match"
    }
}

impl WithError for StringValueMatchRule {
    fn with_error(mut self, error: ValidationError) -> Self {
        self.error = error;
        self
    }
}
