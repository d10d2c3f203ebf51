//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict_validator::prelude::*;` import that brings
//! in the traits, outcome types, rules and form types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let outcome = satisfy_any("12345", &[StringLengthRule::equal(4), StringLengthRule::equal(5)]);
//! assert!(outcome.is_success());
//! ```

// ============================================================================
// FOUNDATION: Values, outcomes, errors, traits
// ============================================================================

pub use crate::foundation::{
    CharacterClass, Outcome, Rule, Status, Validatable, ValidationError, Value,
    ValueKind, ValueType, WithError,
};

// ============================================================================
// COMBINATORS: Folds
// ============================================================================

pub use crate::combinators::{merge_all, satisfy_all, satisfy_any};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

pub use crate::rules::{
    CharacterSetMode, CharacterSetRule, EqualityMode, EqualityRule, LengthMode, PaymentCardRule,
    PaymentCardType, RangeRule, RegexRule, StringLengthRule, StringValueMatchRule,
};

// ============================================================================
// FORM: Fields and aggregation
// ============================================================================

pub use crate::form::{
    Field, FormValidator, InputCell, InputEvent, InputSource, SharedFormValidator, Triggers,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all_of, any_of, rules};
