//! AND combinator: conjunction of an outcome with a further rule
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let outcome = Outcome::succeed("hello")
//!     .and(&StringLengthRule::min(3))
//!     .and(&StringLengthRule::max(4));
//! assert_eq!(outcome.errors(), &[ValidationError::LongerThanMaximumLength]);
//! ```

use crate::foundation::{Outcome, Rule, Status};

impl Outcome {
    /// Evaluates `rule` against the carried value and combines the result.
    ///
    /// - `self` passing: returns the rule's outcome as is.
    /// - `self` failing: stays failed, appends the rule's errors and adopts
    ///   the rule's value.
    ///
    /// The rule is always evaluated; there is no short-circuit.
    #[must_use = "outcome is returned, not modified in place"]
    pub fn and<R: Rule + ?Sized>(mut self, rule: &R) -> Self {
        let next = rule.validate(self.value());
        tracing::trace!(
            rule = rule.name(),
            passed = next.is_success(),
            "and: rule evaluated"
        );
        match self.status() {
            Status::Success => next,
            Status::Failure => {
                let (_, errors, value) = next.into_parts();
                self.extend_errors(errors);
                self.with_value(value)
            }
        }
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
    fn success_and_success() {
        let outcome = Outcome::<Value>::succeed("1").and(&equals("1"));
        assert_eq!(outcome.status(), Status::Success);
        assert_eq!(outcome.value(), &Value::from("1"));
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn success_and_failure_is_the_rule_outcome() {
        let outcome = Outcome::<Value>::succeed("1").and(&equals("5"));
        assert_eq!(outcome, equals("5").validate(&Value::from("1")));
        assert_eq!(outcome.errors(), &[ValidationError::NotEqual]);
    }

    #[test]
    fn failure_and_success_stays_failed() {
        let outcome = Outcome::<Value>::fail_with("1", [ValidationError::InvalidEmail])
            .and(&equals("1"));
        assert_eq!(outcome.status(), Status::Failure);
        assert_eq!(outcome.value(), &Value::from("1"));
        assert_eq!(outcome.errors(), &[ValidationError::InvalidEmail]);
    }

    #[test]
    fn failure_and_failure_appends_errors() {
        let outcome = Outcome::<Value>::fail_with("1", [ValidationError::InvalidEmail])
            .and(&equals("3"));
        assert_eq!(outcome.status(), Status::Failure);
        assert_eq!(outcome.value(), &Value::from("1"));
        assert_eq!(
            outcome.errors(),
            &[ValidationError::InvalidEmail, ValidationError::NotEqual]
        );
    }

    #[test]
    fn failure_adopts_the_rule_value() {
        let outcome = Outcome::<Value>::fail_with("12ab", [ValidationError::InvalidType]).and(
            &crate::rules::CharacterSetRule::numbers_only()
                .ignoring(crate::foundation::CharacterClass::lowercase_letters()),
        );
        assert_eq!(outcome.value(), &Value::from("12"));
        assert_eq!(outcome.errors(), &[ValidationError::InvalidType]);
    }
}
