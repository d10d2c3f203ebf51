//! Core validation types and traits
//!
//! This module contains the building blocks every other module works with:
//!
//! - **Values**: [`Value`], [`ValueKind`], [`ValueType`]
//! - **Outcomes**: [`Outcome`], [`Status`]
//! - **Errors**: [`ValidationError`]
//! - **Traits**: [`Rule`], [`WithError`], [`Validatable`]
//! - **Character classes**: [`CharacterClass`]
//!
//! # Folding rules
//!
//! [`satisfy_all`] seeds a passing outcome and folds `and` over the rules;
//! [`satisfy_any`] seeds a failing outcome and folds `or`.
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let outcome = satisfy_all(10, &[
//!     RangeRule::new(5, 15),
//!     RangeRule::new(0, 9),
//! ]);
//! assert_eq!(outcome.errors(), &[ValidationError::ValueOutOfRange]);
//! ```

pub mod charset;
pub mod error;
pub mod outcome;
pub mod traits;
pub mod validatable;
pub mod value;

pub use charset::CharacterClass;
pub use error::ValidationError;
pub use outcome::{Errors, Outcome, Status};
pub use traits::{Rule, WithError};
pub use validatable::Validatable;
pub use value::{Value, ValueKind, ValueType};

// ============================================================================
// FOLDS
// ============================================================================

/// Validates `value` against every rule, left to right.
///
/// Starts from `Outcome::succeed(value)` and folds [`Outcome::and`]. The
/// outcome passes only if every rule passes; errors accumulate in rule order
/// once the first rule fails. An empty rule list passes.
pub fn satisfy_all<R: Rule>(value: impl Into<Value>, rules: &[R]) -> Outcome {
    let outcome = rules
        .iter()
        .fold(Outcome::succeed(value), |outcome, rule| outcome.and(rule));
    tracing::trace!(
        rules = rules.len(),
        success = outcome.is_success(),
        errors = outcome.errors().len(),
        "satisfy_all folded"
    );
    outcome
}

/// Validates `value` until one rule passes.
///
/// Starts from `Outcome::fail(value)` and folds [`Outcome::or`]. Errors of
/// failing rules accumulate until the first success, then freeze. An empty
/// rule list yields a failure with no errors.
pub fn satisfy_any<R: Rule>(value: impl Into<Value>, rules: &[R]) -> Outcome {
    let outcome = rules
        .iter()
        .fold(Outcome::fail(value), |outcome, rule| outcome.or(rule));
    tracing::trace!(
        rules = rules.len(),
        success = outcome.is_success(),
        errors = outcome.errors().len(),
        "satisfy_any folded"
    );
    outcome
}
