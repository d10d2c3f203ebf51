//! Payment card number rule
//!
//! The input is reduced to its ASCII digits, checked with the Luhn checksum,
//! classified into a [`PaymentCardType`] and finally matched against the
//! accepted categories.

use crate::foundation::{Outcome, Rule, ValidationError, Value, WithError};
use crate::rules::PaymentCardType;

/// A card number must have more digits than this to pass the checksum.
pub const LUHN_MIN_LENGTH: usize = 12;

/// Keeps only the ASCII digits of `input`.
pub fn card_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Luhn checksum over a digits-only string.
///
/// Walks the payload (everything but the check digit) from the right. Digits
/// at even positions in `0..=8` contribute `(2 * d) % 9`, all others
/// contribute `d`. The number is valid when `(sum * 9) % 10` equals the check
/// digit. Returns `false` for `LUHN_MIN_LENGTH` digits or fewer and for any
/// non-digit character.
pub fn luhn_check(digits: &str) -> bool {
    if digits.len() <= LUHN_MIN_LENGTH {
        return false;
    }
    let Some(values) = digits
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };
    let Some((&check, payload)) = values.split_last() else {
        return false;
    };
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(position, &digit)| {
            if position % 2 == 0 && digit <= 8 {
                (digit * 2) % 9
            } else {
                digit
            }
        })
        .sum();
    (sum * 9) % 10 == check
}

/// Validates a card number and reports its category.
///
/// Outcomes:
/// - success: value is the detected [`PaymentCardType`];
/// - bad checksum or unknown category: `InvalidPaymentCardNumber`, value is
///   the suggested category when one can be guessed, else the digit string;
/// - category not accepted: the rule's error (`PaymentCardNotSupported` by
///   default), value is the detected category.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let rule = PaymentCardRule::new([PaymentCardType::Visa]);
/// let outcome = rule.validate(&Value::from("4444 3333 2222 1111"));
/// assert_eq!(outcome.value(), &Value::Card(PaymentCardType::Visa));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCardRule {
    accepted: Vec<PaymentCardType>,
    error: ValidationError,
}

impl PaymentCardRule {
    pub fn new(accepted: impl IntoIterator<Item = PaymentCardType>) -> Self {
        Self {
            accepted: accepted.into_iter().collect(),
            error: ValidationError::PaymentCardNotSupported,
        }
    }

    /// Accepts every category.
    pub fn all() -> Self {
        Self::new(PaymentCardType::ALL)
    }

    pub fn accepted(&self) -> &[PaymentCardType] {
        &self.accepted
    }

    pub fn accepts_type(&self, card: PaymentCardType) -> bool {
        self.accepted.contains(&card)
    }
}

impl Default for PaymentCardRule {
    fn default() -> Self {
        Self::all()
    }
}

impl Rule for PaymentCardRule {
    fn error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, value: &Value) -> Outcome {
        let Some(input) = value.as_str() else {
            return Outcome::fail_with(value.clone(), [ValidationError::InvalidType]);
        };
        let digits = card_digits(input);
        let suggested = PaymentCardType::suggested_for(&digits);

        let detected = if luhn_check(&digits) {
            PaymentCardType::from_card_number(&digits)
        } else {
            None
        };
        let Some(card) = detected else {
            tracing::trace!(digits = digits.len(), suggested = ?suggested, "invalid card number");
            let carried = suggested.map_or(Value::Text(digits), Value::Card);
            return Outcome::fail_with(carried, [ValidationError::InvalidPaymentCardNumber]);
        };

        if self.accepts_type(card) {
            Outcome::succeed(card)
        } else {
            tracing::trace!(card = %card, "card type not accepted");
            Outcome::fail_with(card, [self.error.clone()])
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        value.as_str().is_some()
    }

    fn name(&self) -> &str {
        "payment_card"
    }
}

impl WithError for PaymentCardRule {
    fn with_error(mut self, error: ValidationError) -> Self {
        self.error = error;
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
