//! # verdict-validator
//!
//! A declarative validation engine: independent rules judge one value each,
//! outcomes combine with `and`/`or`, and a form aggregator merges per-field
//! outcomes into one.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let password = rules![
//!     StringLengthRule::min(8),
//!     CharacterSetRule::contains_number(1, usize::MAX),
//!     CharacterSetRule::contains_upper_case(1, usize::MAX),
//! ];
//! let outcome = "Abc12345".satisfy_all(&password);
//! assert!(outcome.is_success());
//! ```
//!
//! ## Outcomes
//!
//! Every rule returns an [`Outcome`](foundation::Outcome): a status, the
//! errors collected so far, and a carried value. Rules never panic on user
//! input; a value of the wrong kind fails with
//! [`InvalidType`](foundation::ValidationError::InvalidType).
//!
//! ## Built-in Rules
//!
//! - **Comparison**: [`EqualityRule`](rules::EqualityRule), [`RangeRule`](rules::RangeRule),
//!   [`StringValueMatchRule`](rules::StringValueMatchRule)
//! - **Strings**: [`StringLengthRule`](rules::StringLengthRule),
//!   [`CharacterSetRule`](rules::CharacterSetRule), [`RegexRule`](rules::RegexRule)
//! - **Payment cards**: [`PaymentCardRule`](rules::PaymentCardRule)
//!
//! ## Features
//!
//! - `json` (default): conversions between `serde_json::Value` and [`Value`](foundation::Value)
//! - `temporal` (default): a `chrono` date-time value kind for ranges and equality

pub mod combinators;
pub mod form;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
mod macros;
pub mod prelude;
pub mod rules;
