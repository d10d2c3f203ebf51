//! MERGE combinator: joining independently computed outcomes
//!
//! Used by the form layer to fold one outcome per field into a single form
//! outcome. The carried value always comes from the left operand; errors
//! accumulate left then right.
//!
//! | self    | other   | status  | errors          |
//! |---------|---------|---------|-----------------|
//! | Success | Success | Success | none            |
//! | Success | Failure | Failure | other's         |
//! | Failure | Success | Failure | self's          |
//! | Failure | Failure | Failure | self's ++ other's |

use crate::foundation::{Outcome, Status};

impl<V> Outcome<V> {
    /// Merges `other` into `self`. See the module table.
    ///
    /// `other` may carry a different value type; only its status and errors
    /// are read.
    #[must_use = "outcome is returned, not modified in place"]
    pub fn merge<W>(mut self, other: &Outcome<W>) -> Self {
        match (self.status(), other.status()) {
            (Status::Success, Status::Success) => {
                self.clear_errors();
            }
            (Status::Success, Status::Failure) => {
                self.set_status(Status::Failure);
                self.clear_errors();
                self.extend_errors(other.errors().iter().cloned());
            }
            (Status::Failure, Status::Success) => {}
            (Status::Failure, Status::Failure) => {
                self.extend_errors(other.errors().iter().cloned());
            }
        }
        self
    }
}

/// Folds `outcomes` into `seed` with [`Outcome::merge`], in iteration order.
pub fn merge_all<'a, V, W: 'a>(
    seed: Outcome<V>,
    outcomes: impl IntoIterator<Item = &'a Outcome<W>>,
) -> Outcome<V> {
    outcomes
        .into_iter()
        .fold(seed, |merged, outcome| merged.merge(outcome))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidationError, Value};
    use pretty_assertions::assert_eq;

    fn ok(v: &str) -> Outcome {
        Outcome::succeed(v)
    }

    fn err(v: &str, e: ValidationError) -> Outcome {
        Outcome::fail_with(v, [e])
    }

    #[test]
    fn success_merge_success() {
        let merged = ok("1").merge(&ok("2"));
        assert_eq!(merged.status(), Status::Success);
        assert_eq!(merged.value(), &Value::from("1"));
        assert!(merged.errors().is_empty());
    }

    #[test]
    fn success_merge_failure_takes_other_errors() {
        let merged = ok("1").merge(&err("3", ValidationError::InvalidEmail));
        assert_eq!(merged.status(), Status::Failure);
        assert_eq!(merged.value(), &Value::from("1"));
        assert_eq!(merged.errors(), &[ValidationError::InvalidEmail]);
    }

    #[test]
    fn failure_merge_success_keeps_own_errors() {
        let merged = err("3", ValidationError::InvalidEmail).merge(&ok("1"));
        assert_eq!(merged.status(), Status::Failure);
        assert_eq!(merged.value(), &Value::from("3"));
        assert_eq!(merged.errors(), &[ValidationError::InvalidEmail]);
    }

    #[test]
    fn failure_merge_failure_concatenates() {
        let merged = err("4", ValidationError::InvalidType)
            .merge(&err("3", ValidationError::InvalidEmail));
        assert_eq!(merged.value(), &Value::from("4"));
        assert_eq!(
            merged.errors(),
            &[ValidationError::InvalidType, ValidationError::InvalidEmail]
        );
    }

    #[test]
    fn stale_success_errors_are_dropped() {
        let stale = Outcome::<Value>::fail_with("x", [ValidationError::NotEqual]).or(
            &crate::rules::EqualityRule::new("x".to_owned()),
        );
        assert!(stale.has_errors());
        assert!(stale.merge(&ok("y")).errors().is_empty());
    }

    #[test]
    fn merge_all_accepts_other_value_types() {
        let fields = [
            ok("a"),
            err("b", ValidationError::NotEqual),
            err("c", ValidationError::InvalidType),
        ];
        let merged = merge_all(Outcome::<Vec<u8>>::succeed(vec![1_u8]), &fields);
        assert_eq!(merged.value(), &vec![1_u8]);
        assert_eq!(
            merged.errors(),
            &[ValidationError::NotEqual, ValidationError::InvalidType]
        );
    }
}
