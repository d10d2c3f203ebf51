//! Validation error kinds
//!
//! Errors are opaque tagged values: the engine compares them by equality and
//! never inspects their text. The `Display` output exists for logs only.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single reason a rule rejected a value.
///
/// Every rule carries exactly one of these as its configurable failure error,
/// while a few failure paths (wrong value kind, bad card checksum) report a
/// fixed kind regardless of configuration.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::foundation::ValidationError;
///
/// let err = ValidationError::custom("passwords must match");
/// assert_eq!(err.code(), "custom");
/// assert_ne!(err, ValidationError::NotEqual);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ValidationError {
    /// The value's kind does not match what the rule expects.
    #[error("value has an unexpected type")]
    InvalidType,

    #[error("values are not equal")]
    NotEqual,

    #[error("values are equal")]
    Equal,

    #[error("length is out of range")]
    LengthOutOfRange,

    #[error("shorter than the minimum length")]
    ShorterThanMinimumLength,

    #[error("longer than the maximum length")]
    LongerThanMaximumLength,

    #[error("value is out of range")]
    ValueOutOfRange,

    #[error("value does not match the pattern")]
    RegexMismatch,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("required digits not found")]
    NumberNotFound,

    #[error("required upper case letters not found")]
    UpperCaseNotFound,

    #[error("required lower case letters not found")]
    LowerCaseNotFound,

    #[error("character set requirement not met")]
    CharacterSetError,

    #[error("number of occurrences is out of range")]
    OccurrencesNotInRange,

    #[error("invalid payment card number")]
    InvalidPaymentCardNumber,

    #[error("payment card type is not supported")]
    PaymentCardNotSupported,

    /// A caller-defined error carrying an arbitrary message.
    #[error("{message}")]
    Custom {
        /// Free-form message; compared verbatim.
        message: Cow<'static, str>,
    },
}

impl ValidationError {
    /// Creates a [`ValidationError::Custom`] with the given message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// Stable snake_case identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidType => "invalid_type",
            Self::NotEqual => "not_equal",
            Self::Equal => "equal",
            Self::LengthOutOfRange => "length_out_of_range",
            Self::ShorterThanMinimumLength => "shorter_than_minimum_length",
            Self::LongerThanMaximumLength => "longer_than_maximum_length",
            Self::ValueOutOfRange => "value_out_of_range",
            Self::RegexMismatch => "regex_mismatch",
            Self::InvalidEmail => "invalid_email",
            Self::NumberNotFound => "number_not_found",
            Self::UpperCaseNotFound => "upper_case_not_found",
            Self::LowerCaseNotFound => "lower_case_not_found",
            Self::CharacterSetError => "character_set_error",
            Self::OccurrencesNotInRange => "occurrences_not_in_range",
            Self::InvalidPaymentCardNumber => "invalid_payment_card_number",
            Self::PaymentCardNotSupported => "payment_card_not_supported",
            Self::Custom { .. } => "custom",
        }
    }

    /// Returns `true` for [`ValidationError::Custom`].
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn custom_errors_compare_by_message() {
        assert_eq!(
            ValidationError::custom("mismatch"),
            ValidationError::custom(String::from("mismatch"))
        );
        assert_ne!(
            ValidationError::custom("mismatch"),
            ValidationError::custom("other")
        );
        assert!(ValidationError::custom("x").is_custom());
        assert!(!ValidationError::InvalidType.is_custom());
    }

    #[test]
    fn display_uses_custom_message() {
        assert_eq!(
            ValidationError::custom("passwords differ").to_string(),
            "passwords differ"
        );
        assert_eq!(
            ValidationError::InvalidPaymentCardNumber.to_string(),
            "invalid payment card number"
        );
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(ValidationError::InvalidType.code(), "invalid_type");
        assert_eq!(
            ValidationError::OccurrencesNotInRange.code(),
            "occurrences_not_in_range"
        );
        assert_eq!(ValidationError::custom("x").code(), "custom");
    }

    #[cfg(feature = "json")]
    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(ValidationError::ValueOutOfRange).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "value_out_of_range" }));

        let custom = serde_json::to_value(ValidationError::custom("nope")).unwrap();
        assert_eq!(
            custom,
            serde_json::json!({ "kind": "custom", "message": "nope" })
        );
    }
}
