//! Built-in rules
//!
//! # Categories
//!
//! - **Comparison**: [`EqualityRule`], [`RangeRule`], [`StringValueMatchRule`]
//! - **Strings**: [`StringLengthRule`], [`CharacterSetRule`], [`RegexRule`]
//! - **Payment cards**: [`PaymentCardRule`], [`PaymentCardType`]
//!
//! Every rule reports a single configurable [`ValidationError`] and answers
//! `InvalidType` for inputs of a kind it cannot judge.
//!
//! [`ValidationError`]: crate::foundation::ValidationError

pub mod card_type;
pub mod character_set;
pub mod equality;
pub mod length;
pub mod pattern;
pub mod payment_card;
pub mod range;
pub mod value_match;

pub use card_type::{PaymentCardType, SUGGESTION_MIN_DIGITS};
pub use character_set::{CharacterSetMode, CharacterSetRule};
pub use equality::{EqualityMode, EqualityRule};
pub use length::{LengthMode, StringLengthRule};
pub use pattern::RegexRule;
pub use payment_card::{LUHN_MIN_LENGTH, PaymentCardRule, card_digits, luhn_check};
pub use range::RangeRule;
pub use value_match::StringValueMatchRule;
