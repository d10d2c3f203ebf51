//! OR combinator: disjunction of an outcome with a further rule
//!
//! Folding `or` from a failing seed finds the first passing rule. Errors of
//! the rules tried before it stay on the outcome, next to `Success`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let outcome = Outcome::fail("12345")
//!     .or(&StringLengthRule::equal(4))
//!     .or(&StringLengthRule::equal(5))
//!     .or(&StringLengthRule::equal(6));
//! assert!(outcome.is_success());
//! assert_eq!(outcome.errors(), &[ValidationError::NotEqual]);
//! ```

use crate::foundation::{Outcome, Rule, Status};

impl Outcome {
    /// Tries `rule` only if `self` failed.
    ///
    /// - `self` passing: returned unchanged, the rule is not evaluated.
    /// - `self` failing: adopts the rule's status and value and appends the
    ///   rule's errors to the running list.
    #[must_use = "outcome is returned, not modified in place"]
    pub fn or<R: Rule + ?Sized>(mut self, rule: &R) -> Self {
        if self.status() == Status::Success {
            return self;
        }
        let next = rule.validate(self.value());
        tracing::trace!(
            rule = rule.name(),
            passed = next.is_success(),
            "or: rule evaluated"
        );
        let (status, errors, value) = next.into_parts();
        self.set_status(status);
        self.extend_errors(errors);
        self.with_value(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidationError, Value};
    use crate::rules::EqualityRule;
    use pretty_assertions::assert_eq;

    fn equals(reference: &str) -> EqualityRule<String> {
        EqualityRule::new(reference.to_owned())
    }

    #[test]
    fn success_or_anything_is_unchanged() {
        let seed = Outcome::<Value>::succeed("1");
        assert_eq!(seed.clone().or(&equals("1")), seed);
        assert_eq!(seed.clone().or(&equals("5")), seed);
    }

    #[test]
    fn failure_or_success_keeps_earlier_errors() {
        let outcome = Outcome::<Value>::fail_with("1", [ValidationError::InvalidEmail])
            .or(&equals("1"));
        assert_eq!(outcome.status(), Status::Success);
        assert_eq!(outcome.value(), &Value::from("1"));
        assert_eq!(outcome.errors(), &[ValidationError::InvalidEmail]);
    }

    #[test]
    fn failure_or_failure_appends_errors() {
        let outcome = Outcome::<Value>::fail_with("1", [ValidationError::InvalidEmail])
            .or(&equals("3"));
        assert_eq!(outcome.status(), Status::Failure);
        assert_eq!(outcome.value(), &Value::from("1"));
        assert_eq!(
            outcome.errors(),
            &[ValidationError::InvalidEmail, ValidationError::NotEqual]
        );
    }

    #[test]
    fn errors_freeze_after_first_success() {
        let outcome = Outcome::<Value>::fail("a")
            .or(&equals("b"))
            .or(&equals("a"))
            .or(&equals("c"));
        assert!(outcome.is_success());
        assert_eq!(outcome.errors(), &[ValidationError::NotEqual]);
    }
}
