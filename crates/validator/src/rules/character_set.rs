//! Character set rule
//!
//! Judges a string by how its characters relate to a [`CharacterClass`]. An
//! optional ignore set is stripped first; the outcome carries the stripped
//! string whether the rule passes or not.

use crate::foundation::{CharacterClass, Outcome, Rule, ValidationError, Value, WithError};

/// How the characters of the input must relate to the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterSetMode {
    /// Number of member characters lies in `[min, max]`.
    Contains { min: usize, max: usize },
    /// Every character is a member. An empty input passes, unless it became
    /// empty only because the ignore set removed everything.
    ContainsOnly,
    /// No character is a member.
    DoesNotContain,
}

impl Default for CharacterSetMode {
    fn default() -> Self {
        Self::Contains {
            min: 1,
            max: usize::MAX,
        }
    }
}

/// Checks character membership, counts, or exclusion against a class.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let rule = CharacterSetRule::numbers_only().ignoring(CharacterClass::whitespaces());
/// let outcome = rule.validate(&Value::from("7623 2836 3 44 3435 "));
/// assert!(outcome.is_success());
/// assert_eq!(outcome.value(), &Value::from("762328363443435"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSetRule {
    class: CharacterClass,
    mode: CharacterSetMode,
    ignore: Option<CharacterClass>,
    error: ValidationError,
}

impl CharacterSetRule {
    /// Reports `CharacterSetError`.
    ///
    /// # Panics
    ///
    /// Panics if a `Contains` mode has `min > max`.
    pub fn new(class: CharacterClass, mode: CharacterSetMode) -> Self {
        if let CharacterSetMode::Contains { min, max } = mode {
            assert!(
                min <= max,
                "character set rule requires min <= max, got {min} > {max}"
            );
        }
        Self {
            class,
            mode,
            ignore: None,
            error: ValidationError::CharacterSetError,
        }
    }

    pub fn contains(class: CharacterClass, min: usize, max: usize) -> Self {
        Self::new(class, CharacterSetMode::Contains { min, max })
    }

    pub fn contains_only(class: CharacterClass) -> Self {
        Self::new(class, CharacterSetMode::ContainsOnly)
    }

    pub fn does_not_contain(class: CharacterClass) -> Self {
        Self::new(class, CharacterSetMode::DoesNotContain)
    }

    /// Between `min` and `max` decimal digits. Reports `OccurrencesNotInRange`.
    pub fn contains_number(min: usize, max: usize) -> Self {
        Self::contains(CharacterClass::decimal_digits(), min, max)
            .with_error(ValidationError::OccurrencesNotInRange)
    }

    /// Between `min` and `max` upper case letters. Reports `OccurrencesNotInRange`.
    pub fn contains_upper_case(min: usize, max: usize) -> Self {
        Self::contains(CharacterClass::uppercase_letters(), min, max)
            .with_error(ValidationError::OccurrencesNotInRange)
    }

    /// Between `min` and `max` lower case letters. Reports `OccurrencesNotInRange`.
    pub fn contains_lower_case(min: usize, max: usize) -> Self {
        Self::contains(CharacterClass::lowercase_letters(), min, max)
            .with_error(ValidationError::OccurrencesNotInRange)
    }

    /// Between `min` and `max` symbols. Reports `OccurrencesNotInRange`.
    pub fn contains_symbols(min: usize, max: usize) -> Self {
        Self::contains(CharacterClass::symbols(), min, max)
            .with_error(ValidationError::OccurrencesNotInRange)
    }

    /// Decimal digits only. Reports `InvalidType`.
    pub fn numbers_only() -> Self {
        Self::contains_only(CharacterClass::decimal_digits())
            .with_error(ValidationError::InvalidType)
    }

    /// Upper case letters only. Reports `InvalidType`.
    pub fn upper_case_only() -> Self {
        Self::contains_only(CharacterClass::uppercase_letters())
            .with_error(ValidationError::InvalidType)
    }

    /// Lower case letters only. Reports `InvalidType`.
    pub fn lower_case_only() -> Self {
        Self::contains_only(CharacterClass::lowercase_letters())
            .with_error(ValidationError::InvalidType)
    }

    /// Strips characters of `class` before judging.
    #[must_use = "builder methods must be chained or built"]
    pub fn ignoring(mut self, class: CharacterClass) -> Self {
        self.ignore = Some(class);
        self
    }

    pub fn class(&self) -> &CharacterClass {
        &self.class
    }

    pub fn mode(&self) -> CharacterSetMode {
        self.mode
    }

    fn judge(&self, original: &str, stripped: &str) -> bool {
        match self.mode {
            CharacterSetMode::Contains { min, max } => {
                (min..=max).contains(&self.class.count_in(stripped))
            }
            CharacterSetMode::ContainsOnly => {
                let emptied = stripped.is_empty() && !original.is_empty();
                !emptied && self.class.all_in(stripped)
            }
            CharacterSetMode::DoesNotContain => !self.class.any_in(stripped),
        }
    }
}

impl Rule for CharacterSetRule {
    fn error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, value: &Value) -> Outcome {
        let Some(input) = value.as_str() else {
            return Outcome::fail_with(value.clone(), [ValidationError::InvalidType]);
        };
        let stripped = match &self.ignore {
            Some(ignore) => ignore.strip(input),
            None => input.to_owned(),
        };
        if self.judge(input, &stripped) {
            Outcome::succeed(stripped)
        } else {
            Outcome::fail_with(stripped, [self.error.clone()])
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        value.as_str().is_some()
    }

    fn name(&self) -> &str {
        "character_set"
    }
}

impl WithError for CharacterSetRule {
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

    fn check(rule: &CharacterSetRule, input: &str) -> Outcome {
        rule.validate(&Value::from(input))
    }

    #[test]
    fn non_text_is_invalid_type() {
        let rule = CharacterSetRule::new(CharacterClass::alphanumerics(), CharacterSetMode::default());
        let outcome = rule.validate(&Value::Int(34));
        assert_eq!(outcome.errors(), &[ValidationError::InvalidType]);
        assert_eq!(outcome.value(), &Value::Int(34));
    }

    #[rstest]
    #[case::six_upper("A String With 6 UpperCase Letters.!", true)]
    #[case::one_upper("A string with 1 uppercase letter.!", false)]
    #[case::all_upper("A STRING FULL OF UPPERCASE LETTERS.!", false)]
    #[case::empty("", false)]
    fn contains_counts(#[case] input: &str, #[case] passes: bool) {
        let rule = CharacterSetRule::contains(CharacterClass::uppercase_letters(), 5, 7);
        let outcome = check(&rule, input);
        assert_eq!(outcome.is_success(), passes);
        assert_eq!(outcome.value(), &Value::from(input));
        if !passes {
            assert_eq!(outcome.errors(), &[ValidationError::CharacterSetError]);
        }
    }

    #[rstest]
    #[case::all_lower("lowercase", true)]
    #[case::mixed("camelCase!", false)]
    #[case::empty("", true)]
    fn contains_only(#[case] input: &str, #[case] passes: bool) {
        let rule = CharacterSetRule::contains_only(CharacterClass::lowercase_letters());
        assert_eq!(check(&rule, input).is_success(), passes);
    }

    #[rstest]
    #[case::none("A String With No Symbols.", true)]
    #[case::dollar("Is $ a symbol?", false)]
    #[case::empty("", true)]
    fn does_not_contain(#[case] input: &str, #[case] passes: bool) {
        let rule = CharacterSetRule::does_not_contain(CharacterClass::symbols());
        assert_eq!(check(&rule, input).is_success(), passes);
    }

    #[rstest]
    #[case::one("Hey there.! 1 is good enough.", true)]
    #[case::zero("zero numbers are not enough", false)]
    #[case::each_digit_counts("Maximum of 3 numbers are allowed. So what to do with 999 other numbers.", false)]
    #[case::empty("", false)]
    fn contains_number(#[case] input: &str, #[case] passes: bool) {
        let outcome = check(&CharacterSetRule::contains_number(1, 3), input);
        assert_eq!(outcome.is_success(), passes);
        if !passes {
            assert_eq!(outcome.errors(), &[ValidationError::OccurrencesNotInRange]);
        }
    }

    #[rstest]
    #[case::one("Hey there.! 1 upper case is good enough.", true)]
    #[case::zero("zero upper case are not enough", false)]
    #[case::six("Maximum Of 3 UpperCases Are Allowed.", false)]
    fn contains_upper_case(#[case] input: &str, #[case] passes: bool) {
        assert_eq!(
            check(&CharacterSetRule::contains_upper_case(1, 3), input).is_success(),
            passes
        );
    }

    #[rstest]
    #[case::one("HEY THERE, 'a' IS THE ONLY LOWER CASE HERE.", true)]
    #[case::zero("0 LOWER CASES ARE NOT ENOUGH.", false)]
    #[case::many("Maximum Of 3 LowerCases Are Allowed.", false)]
    fn contains_lower_case(#[case] input: &str, #[case] passes: bool) {
        assert_eq!(
            check(&CharacterSetRule::contains_lower_case(1, 3), input).is_success(),
            passes
        );
    }

    #[rstest]
    #[case::one("$ is the only symbol HERE", true)]
    #[case::zero("0 SYMBOLS ARE NOT ENOUGH", false)]
    #[case::four("$Maximum Of ^3^ symbols are allowed$", false)]
    fn contains_symbols(#[case] input: &str, #[case] passes: bool) {
        assert_eq!(
            check(&CharacterSetRule::contains_symbols(1, 3), input).is_success(),
            passes
        );
    }

    #[test]
    fn numbers_only() {
        let rule = CharacterSetRule::numbers_only();
        assert!(check(&rule, "0555898666").is_success());
        assert!(check(&rule, "").is_success());
        assert_eq!(
            check(&rule, "0000o0000").errors(),
            &[ValidationError::InvalidType]
        );
    }

    #[test]
    fn numbers_only_ignoring_whitespace_returns_stripped() {
        let rule = CharacterSetRule::numbers_only().ignoring(CharacterClass::whitespaces());
        let outcome = check(&rule, "7623 2836 3 44 3435 ");
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), &Value::from("762328363443435"));

        let blank = check(&rule, "    ");
        assert!(blank.is_failure());
        assert!(blank.has_errors());
        assert_eq!(blank.value(), &Value::from(""));
    }

    #[test]
    fn lower_case_only_ignoring_digits() {
        let plain = CharacterSetRule::lower_case_only();
        assert!(check(&plain, "lowercase").is_success());
        assert_eq!(check(&plain, "lowerCase").errors(), &[ValidationError::InvalidType]);

        let rule = plain.ignoring(CharacterClass::decimal_digits());
        let outcome = check(&rule, "942dh88efbuwmd0efnwed5wjfw3fefhebf");
        assert_eq!(outcome.value(), &Value::from("dhefbuwmdefnwedwjfwfefhebf"));
        assert!(outcome.is_success());

        let digits_only = check(&rule, "0555");
        assert!(digits_only.is_failure());
        assert_eq!(digits_only.value(), &Value::from(""));
    }

    #[test]
    fn upper_case_only_ignoring_whitespace() {
        let rule = CharacterSetRule::upper_case_only().ignoring(CharacterClass::whitespaces());
        let outcome = check(&rule, " WEFW VERUVNE CWEMWOGBWE SDWKXMAEDNWEF EE ");
        assert!(outcome.is_success());
        assert_eq!(
            outcome.value(),
            &Value::from("WEFWVERUVNECWEMWOGBWESDWKXMAEDNWEFEE")
        );
        assert!(check(&rule, "    ").is_failure());
        assert_eq!(
            check(&CharacterSetRule::upper_case_only(), "UpperCase").errors(),
            &[ValidationError::InvalidType]
        );
    }

    #[test]
    #[should_panic(expected = "min <= max")]
    fn inverted_contains_bounds_panic() {
        let _ = CharacterSetRule::contains_number(4, 2);
    }
}
