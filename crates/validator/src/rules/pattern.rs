//! Regular expression rule
//!
//! Patterns must match the whole input; every pattern is compiled wrapped as
//! `^(?:pattern)$`, so `\d{3}` rejects `"1234"`.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Outcome, Rule, ValidationError, Value, WithError};

const EMAIL: &str = r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| anchored(EMAIL).unwrap());
static NUMBERS_ONLY_REGEX: LazyLock<Regex> = LazyLock::new(|| anchored("[0-9]*").unwrap());
static LOWER_CASE_ONLY_REGEX: LazyLock<Regex> = LazyLock::new(|| anchored("[a-z]*").unwrap());
static UPPER_CASE_ONLY_REGEX: LazyLock<Regex> = LazyLock::new(|| anchored("[A-Z]*").unwrap());

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Passes when the whole input matches a regular expression.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let phone = RegexRule::new(r"\+\d{2,3}-\d{9,10}")?;
/// assert!(phone.validate(&Value::from("+971-555898666")).is_success());
/// assert!(phone.validate(&Value::from("+971555898666")).is_failure());
/// ```
#[derive(Debug, Clone)]
pub struct RegexRule {
    pattern: String,
    regex: Regex,
    error: ValidationError,
}

impl RegexRule {
    /// Compiles `pattern`. Reports `RegexMismatch`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::compiled(
            pattern,
            anchored(pattern)?,
            ValidationError::RegexMismatch,
        ))
    }

    fn compiled(pattern: &str, regex: Regex, error: ValidationError) -> Self {
        Self {
            pattern: pattern.to_owned(),
            regex,
            error,
        }
    }

    /// Builds one of the repetition-bounded presence factories.
    fn repeated(class: &str, min: u8, max: u8, error: ValidationError) -> Self {
        assert!(min <= max, "regex rule requires min <= max, got {min} > {max}");
        let pattern = format!("(?:[^{class}]*[{class}][^{class}]*){{{min},{max}}}");
        // Assembled from a fixed ASCII class and two integers.
        let regex = anchored(&pattern).expect("repetition pattern compiles");
        Self::compiled(&pattern, regex, error)
    }

    /// Email address. Reports `InvalidEmail`.
    pub fn email() -> Self {
        Self::compiled(EMAIL, EMAIL_REGEX.clone(), ValidationError::InvalidEmail)
    }

    /// Between `min` and `max` ASCII digits. Reports `NumberNotFound`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn contains_number(min: u8, max: u8) -> Self {
        Self::repeated("0-9", min, max, ValidationError::NumberNotFound)
    }

    /// Between `min` and `max` ASCII upper case letters. Reports `UpperCaseNotFound`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn contains_upper_case(min: u8, max: u8) -> Self {
        Self::repeated("A-Z", min, max, ValidationError::UpperCaseNotFound)
    }

    /// Between `min` and `max` ASCII lower case letters. Reports `LowerCaseNotFound`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn contains_lower_case(min: u8, max: u8) -> Self {
        Self::repeated("a-z", min, max, ValidationError::LowerCaseNotFound)
    }

    /// At least one ASCII digit.
    pub fn has_number() -> Self {
        Self::contains_number(1, u8::MAX)
    }

    /// At least one ASCII upper case letter.
    pub fn has_upper_case() -> Self {
        Self::contains_upper_case(1, u8::MAX)
    }

    /// At least one ASCII lower case letter.
    pub fn has_lower_case() -> Self {
        Self::contains_lower_case(1, u8::MAX)
    }

    /// ASCII digits only, empty allowed. Reports `InvalidType`.
    pub fn numbers_only() -> Self {
        Self::compiled("[0-9]*", NUMBERS_ONLY_REGEX.clone(), ValidationError::InvalidType)
    }

    /// ASCII lower case only, empty allowed. Reports `InvalidType`.
    pub fn lower_case_only() -> Self {
        Self::compiled("[a-z]*", LOWER_CASE_ONLY_REGEX.clone(), ValidationError::InvalidType)
    }

    /// ASCII upper case only, empty allowed. Reports `InvalidType`.
    pub fn upper_case_only() -> Self {
        Self::compiled("[A-Z]*", UPPER_CASE_ONLY_REGEX.clone(), ValidationError::InvalidType)
    }

    /// The pattern as given, without the anchoring wrapper.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl PartialEq for RegexRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.error == other.error
    }
}

impl Rule for RegexRule {
    fn error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, value: &Value) -> Outcome {
        let Some(input) = value.as_str() else {
            return Outcome::fail_with(value.clone(), [ValidationError::InvalidType]);
        };
        if self.regex.is_match(input) {
            Outcome::succeed(value.clone())
        } else {
            Outcome::fail_with(value.clone(), [self.error.clone()])
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        value.as_str().is_some()
    }

    fn name(&self) -> &str {
        "regex"
    }
}

impl WithError for RegexRule {
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

    const PHONE: &str = r"\+\d{2,3}-\d{9,10}";

    fn passes(rule: &RegexRule, input: &str) -> bool {
        rule.validate(&Value::from(input)).is_success()
    }

    #[test]
    fn non_text_is_invalid_type() {
        let outcome = RegexRule::new(PHONE).unwrap().validate(&Value::Int(34));
        assert_eq!(outcome.errors(), &[ValidationError::InvalidType]);
        assert_eq!(outcome.value(), &Value::Int(34));
    }

    #[rstest]
    #[case("+971-555898666")]
    #[case("+91-7885433992")]
    fn phone_matches(#[case] input: &str) {
        let outcome = RegexRule::new(PHONE).unwrap().validate(&Value::from(input));
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), &Value::from(input));
    }

    #[rstest]
    #[case::no_dash("+971555898666")]
    #[case::no_plus("91-7885433992")]
    #[case::short_prefix("+1-7885433992")]
    #[case::long_prefix("+9331-7885433992")]
    #[case::short_number("+971-33992")]
    #[case::empty("")]
    fn phone_mismatches(#[case] input: &str) {
        let outcome = RegexRule::new(PHONE).unwrap().validate(&Value::from(input));
        assert_eq!(outcome.errors(), &[ValidationError::RegexMismatch]);
        assert_eq!(outcome.value(), &Value::from(input));
    }

    #[test]
    fn match_is_anchored() {
        let rule = RegexRule::new(r"\d{3}").unwrap();
        assert!(passes(&rule, "123"));
        assert!(!passes(&rule, "1234"));
        assert!(!passes(&rule, "a123"));

        let alternation = RegexRule::new("ab|cd").unwrap();
        assert!(!passes(&alternation, "abcd"));
        assert_eq!(alternation.pattern(), "ab|cd");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(RegexRule::new("(unclosed").is_err());
    }

    #[rstest]
    #[case("suthomas@altayer.com", true)]
    #[case("@altayer.com", false)]
    #[case("suthomas@.com", false)]
    #[case("suthomas@altayer.c", false)]
    #[case("suthomas.altayer@com", false)]
    #[case("", false)]
    fn email(#[case] input: &str, #[case] expected: bool) {
        let outcome = RegexRule::email().validate(&Value::from(input));
        assert_eq!(outcome.is_success(), expected);
        if !expected {
            assert_eq!(outcome.errors(), &[ValidationError::InvalidEmail]);
        }
    }

    #[rstest]
    #[case("buy 1 get 2 free", true)]
    #[case("no numbers here", false)]
    #[case("5 numbers here including 1, 2, 3 and 4.", false)]
    #[case("", false)]
    fn contains_number(#[case] input: &str, #[case] expected: bool) {
        let outcome = RegexRule::contains_number(2, 4).validate(&Value::from(input));
        assert_eq!(outcome.is_success(), expected);
        if !expected {
            assert_eq!(outcome.errors(), &[ValidationError::NumberNotFound]);
        }
    }

    #[rstest]
    #[case("HeLlO GeNeRaL KeNoBi!", true)]
    #[case("NO LOWERCASE HERE", false)]
    #[case("'d' IS THE ONLY LOWERCASE HERE.!", false)]
    #[case("", false)]
    fn contains_lower_case(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(passes(&RegexRule::contains_lower_case(5, 10), input), expected);
    }

    #[rstest]
    #[case("HeLlO GeNeRaL KeNoBi!", true)]
    #[case("no uppercase here", false)]
    #[case("'U' is the only upper case character here.!", false)]
    #[case("", false)]
    fn contains_upper_case(#[case] input: &str, #[case] expected: bool) {
        let outcome = RegexRule::contains_upper_case(5, 10).validate(&Value::from(input));
        assert_eq!(outcome.is_success(), expected);
        if !expected {
            assert_eq!(outcome.errors(), &[ValidationError::UpperCaseNotFound]);
        }
    }

    #[test]
    fn default_presence_bounds() {
        assert!(passes(&RegexRule::has_number(), "abc1"));
        assert!(!passes(&RegexRule::has_number(), "abc"));
        assert!(passes(&RegexRule::has_upper_case(), "Abc12345"));
        assert!(!passes(&RegexRule::has_upper_case(), "abc12345"));
        assert!(passes(&RegexRule::has_lower_case(), "Abc"));
    }

    #[test]
    fn only_factories() {
        assert!(passes(&RegexRule::numbers_only(), "0555898666"));
        assert!(passes(&RegexRule::numbers_only(), ""));
        assert_eq!(
            RegexRule::numbers_only()
                .validate(&Value::from("0000o0000"))
                .errors(),
            &[ValidationError::InvalidType]
        );
        assert!(passes(&RegexRule::lower_case_only(), "lowercase"));
        assert!(!passes(&RegexRule::lower_case_only(), "lowerCase"));
        assert!(passes(&RegexRule::upper_case_only(), "UPPERCASE"));
        assert!(!passes(&RegexRule::upper_case_only(), "UpperCase"));
        assert!(passes(&RegexRule::upper_case_only(), ""));
    }

    #[test]
    #[should_panic(expected = "min <= max")]
    fn inverted_bounds_panic() {
        let _ = RegexRule::contains_number(5, 1);
    }
}
