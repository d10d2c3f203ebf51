//! Payment card categories
//!
//! Two pattern tables per category: a definitive one that matches complete
//! card numbers, and a prefix one used to guess the category of a partial or
//! mistyped number. Both are tried in [`PaymentCardType::ALL`] order and the
//! first match wins.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The card categories the payment card rule can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCardType {
    Amex,
    Mastercard,
    Maestro,
    VisaElectron,
    Visa,
    Discover,
    DinersClub,
}

const DEFINITIVE: [&str; 7] = [
    r"3[47]\d{13}",
    r"((5[1-5]\d{4}|677189)\d{10})|((222[1-9]|22[3-9]\d|2[3-6]\d{2}|27[0-1]\d|2720)\d{12})",
    r"(5018|5020|5038|6304|670[38]|6759|676[1-3])\d{12}(?:\d{3})?",
    r"(417500\d{7}|4(026|405|508|844|91[37])\d{9})(?:\d{3})?",
    r"4\d{12}(?:\d{3})?",
    r"6(?:011|4[4-9]\d|5\d{2}|22\d)\d{12}(?:\d{3})?",
    r"3(?:0[0-5]|[68]\d)\d{11}",
];

const PREFIX: [&str; 7] = [
    r"3[47][0-9]*",
    r"((5[1-5]|677189)\d*)|((222[1-9]|22[3-9]\d|2[3-6]\d{2}|27[0-1]\d|2720)\d*)",
    r"(5018|5020|5038|6304|670[38]|6759|676[1-3])\d*",
    r"4(17500|026|405|508|844|91[37])\d*",
    r"4\d*",
    r"6(?:011|4[4-9]|5|22)\d*",
    r"3(?:0[0-5]|[68])\d*",
];

/// Fewest digits needed before a category is guessed.
pub const SUGGESTION_MIN_DIGITS: usize = 4;

static DEFINITIVE_REGEXES: LazyLock<[Regex; 7]> = LazyLock::new(|| compile(DEFINITIVE));
static PREFIX_REGEXES: LazyLock<[Regex; 7]> = LazyLock::new(|| compile(PREFIX));

fn compile(patterns: [&str; 7]) -> [Regex; 7] {
    patterns.map(|p| Regex::new(&format!("^(?:{p})$")).unwrap())
}

impl PaymentCardType {
    /// Every category, in detection order.
    pub const ALL: [Self; 7] = [
        Self::Amex,
        Self::Mastercard,
        Self::Maestro,
        Self::VisaElectron,
        Self::Visa,
        Self::Discover,
        Self::DinersClub,
    ];

    /// Display name, e.g. `"American Express"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Amex => "American Express",
            Self::Mastercard => "MasterCard",
            Self::Maestro => "Maestro",
            Self::VisaElectron => "Visa Electron",
            Self::Visa => "Visa",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Whether `digits` is a complete number of this category.
    pub fn matches(self, digits: &str) -> bool {
        DEFINITIVE_REGEXES[self.index()].is_match(digits)
    }

    /// Whether `digits` starts like a number of this category.
    pub fn matches_prefix(self, digits: &str) -> bool {
        PREFIX_REGEXES[self.index()].is_match(digits)
    }

    /// The category of a complete card number, digits only.
    pub fn from_card_number(digits: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|card| card.matches(digits))
    }

    /// Best guess at the category of a possibly partial number, digits only.
    ///
    /// Returns `None` below [`SUGGESTION_MIN_DIGITS`] digits.
    pub fn suggested_for(digits: &str) -> Option<Self> {
        if digits.len() < SUGGESTION_MIN_DIGITS {
            return None;
        }
        Self::ALL.into_iter().find(|card| card.matches_prefix(digits))
    }
}

impl fmt::Display for PaymentCardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
