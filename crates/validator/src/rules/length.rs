//! String length rule
//!
//! Length is measured on a normalized copy of the input: characters of the
//! ignore set are removed first, then surrounding whitespace is trimmed. The
//! outcome always carries the original input, never the normalized copy.

use crate::foundation::{CharacterClass, Outcome, Rule, ValidationError, Value, WithError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// Passes when the normalized length lies in `[min, max]`.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let rule = StringLengthRule::equal(6).ignoring(CharacterClass::symbols());
/// let outcome = rule.validate(&Value::from("1234$de $     ^"));
/// assert!(outcome.is_success());
/// assert_eq!(outcome.value(), &Value::from("1234$de $     ^"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StringLengthRule {
    min: usize,
    max: usize,
    trim_whitespace: bool,
    ignore: Option<CharacterClass>,
    mode: LengthMode,
    error: ValidationError,
}

impl StringLengthRule {
    /// Length in `[min, max]`, trimming enabled. Reports `LengthOutOfRange`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(min: usize, max: usize) -> Self {
        assert!(min <= max, "length rule requires min <= max, got {min} > {max}");
        Self {
            min,
            max,
            trim_whitespace: true,
            ignore: None,
            mode: LengthMode::Chars,
            error: ValidationError::LengthOutOfRange,
        }
    }

    /// At least `min`. Reports `ShorterThanMinimumLength`.
    pub fn min(min: usize) -> Self {
        Self::new(min, usize::MAX).with_error(ValidationError::ShorterThanMinimumLength)
    }

    /// At most `max`. Reports `LongerThanMaximumLength`.
    pub fn max(max: usize) -> Self {
        Self::new(0, max).with_error(ValidationError::LongerThanMaximumLength)
    }

    /// Exactly `length`. Reports `NotEqual`.
    pub fn equal(length: usize) -> Self {
        Self::new(length, length).with_error(ValidationError::NotEqual)
    }

    /// At least one character after normalization.
    pub fn non_empty() -> Self {
        Self::min(1)
    }

    /// Whether surrounding whitespace and newlines are ignored when measuring.
    #[must_use = "builder methods must be chained or built"]
    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Characters of `class` do not count toward the length.
    #[must_use = "builder methods must be chained or built"]
    pub fn ignoring(mut self, class: CharacterClass) -> Self {
        self.ignore = Some(class);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn counting(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Length of `input` as this rule measures it.
    pub fn measure(&self, input: &str) -> usize {
        let stripped = match &self.ignore {
            Some(class) => class.strip(input),
            None => input.to_owned(),
        };
        let normalized = if self.trim_whitespace {
            stripped.trim()
        } else {
            stripped.as_str()
        };
        self.mode.measure(normalized)
    }
}

impl Rule for StringLengthRule {
    fn error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, value: &Value) -> Outcome {
        let Some(input) = value.as_str() else {
            return Outcome::fail_with(value.clone(), [ValidationError::InvalidType]);
        };
        let length = self.measure(input);
        if (self.min..=self.max).contains(&length) {
            Outcome::succeed(value.clone())
        } else {
            Outcome::fail_with(value.clone(), [self.error.clone()])
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        value.as_str().is_some()
    }

    fn name(&self) -> &str {
        "string_length"
    }
}

impl WithError for StringLengthRule {
    fn with_error(mut self, error: ValidationError) -> Self {
        self.error = error;
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn non_text_is_invalid_type() {
        let outcome = StringLengthRule::new(2, 7).validate(&Value::Int(34));
        assert_eq!(outcome.errors(), &[ValidationError::InvalidType]);
        assert_eq!(outcome.value(), &Value::Int(34));
    }

    #[test]
    fn equal_length() {
        let rule = StringLengthRule::equal(7);
        assert!(rule.validate(&Value::from("1234567")).is_success());

        let outcome = rule.validate(&Value::from("123"));
        assert_eq!(outcome.errors(), &[ValidationError::NotEqual]);
        assert_eq!(outcome.value(), &Value::from("123"));
    }

    #[rstest]
    #[case::inside(5, 15)]
    #[case::on_lower_bound(7, 15)]
    #[case::on_upper_bound(2, 7)]
    fn within_bounds(#[case] min: usize, #[case] max: usize) {
        let outcome = StringLengthRule::new(min, max).validate(&Value::from("1234567"));
        assert!(outcome.is_success());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn above_maximum() {
        let outcome = StringLengthRule::max(5).validate(&Value::from("1234567"));
        assert_eq!(outcome.errors(), &[ValidationError::LongerThanMaximumLength]);
        assert_eq!(outcome.value(), &Value::from("1234567"));
    }

    #[test]
    fn below_minimum() {
        let outcome = StringLengthRule::min(10).validate(&Value::from("1234567"));
        assert_eq!(outcome.errors(), &[ValidationError::ShorterThanMinimumLength]);
    }

    #[test]
    fn trimming_keeps_original_value() {
        let outcome = StringLengthRule::new(2, 7).validate(&Value::from("1234567   "));
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), &Value::from("1234567   "));
    }

    #[test]
    fn trimming_leaves_inner_whitespace() {
        let outcome = StringLengthRule::equal(8).validate(&Value::from("   123 4567   "));
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), &Value::from("   123 4567   "));
    }

    #[test]
    fn without_trimming() {
        let outcome = StringLengthRule::new(2, 7)
            .trim_whitespace(false)
            .validate(&Value::from("1234567   "));
        assert_eq!(outcome.errors(), &[ValidationError::LengthOutOfRange]);
        assert_eq!(outcome.value(), &Value::from("1234567   "));
    }

    #[test]
    fn ignore_set_is_stripped_before_trimming() {
        let rule = StringLengthRule::equal(6).ignoring(CharacterClass::symbols());
        let outcome = rule.validate(&Value::from("1234$de $     ^"));
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), &Value::from("1234$de $     ^"));
        assert_eq!(rule.measure("1234$de $     ^"), 6);
    }

    #[test]
    fn newlines_are_trimmed() {
        assert_eq!(StringLengthRule::new(0, 10).measure("\n  abc \r\n"), 3);
    }

    #[test]
    fn non_empty_rejects_blank() {
        let rule = StringLengthRule::non_empty();
        assert!(rule.validate(&Value::from("x")).is_success());
        assert_eq!(
            rule.validate(&Value::from("   ")).errors(),
            &[ValidationError::ShorterThanMinimumLength]
        );
    }

    #[test]
    fn byte_counting() {
        let rule = StringLengthRule::max(3).counting(LengthMode::Bytes);
        assert!(rule.validate(&Value::from("héé")).is_failure());
        assert!(StringLengthRule::max(3).validate(&Value::from("héé")).is_success());
    }
}
