//! Unicode character classes
//!
//! A [`CharacterClass`] is a set of characters described by a regex class
//! body (for example `\p{Nd}`). It is compiled twice: once as `[body]` for
//! counting and stripping, once as `[^body]` to test "only members".

use std::fmt;

use regex::Regex;

/// A set of characters, used by the character-set rule and as the "ignore"
/// set of the length and character-set rules.
#[derive(Clone)]
pub struct CharacterClass {
    name: String,
    body: String,
    member: Regex,
    outsider: Regex,
}

impl CharacterClass {
    fn preset(name: &str, body: &str) -> Self {
        // Presets are fixed, well-formed class bodies.
        Self::from_class_body(name, body).expect("preset character class compiles")
    }

    fn from_class_body(name: &str, body: &str) -> Result<Self, regex::Error> {
        if closes_early(body) {
            return Err(regex::Error::Syntax(format!(
                "character class body `{body}` closes its class early"
            )));
        }
        Ok(Self {
            name: name.to_owned(),
            body: body.to_owned(),
            member: Regex::new(&format!("[{body}]"))?,
            // Negating the nested member class keeps both views in agreement,
            // even when the body itself starts with `^`.
            outsider: Regex::new(&format!("[^[{body}]]"))?,
        })
    }

    /// Unicode decimal digits (`Nd`).
    pub fn decimal_digits() -> Self {
        Self::preset("decimal_digits", r"\p{Nd}")
    }

    /// Upper and title case letters (`Lu`, `Lt`).
    pub fn uppercase_letters() -> Self {
        Self::preset("uppercase_letters", r"\p{Lu}\p{Lt}")
    }

    /// Lower case letters (`Ll`).
    pub fn lowercase_letters() -> Self {
        Self::preset("lowercase_letters", r"\p{Ll}")
    }

    /// Letters and marks (`L`, `M`).
    pub fn letters() -> Self {
        Self::preset("letters", r"\p{L}\p{M}")
    }

    /// Letters, marks and numbers (`L`, `M`, `N`).
    pub fn alphanumerics() -> Self {
        Self::preset("alphanumerics", r"\p{L}\p{M}\p{N}")
    }

    /// Symbols (`S`): currency, math, modifier and other symbols.
    pub fn symbols() -> Self {
        Self::preset("symbols", r"\p{S}")
    }

    /// Punctuation (`P`).
    pub fn punctuation() -> Self {
        Self::preset("punctuation", r"\p{P}")
    }

    /// Space separators and tab.
    pub fn whitespaces() -> Self {
        Self::preset("whitespaces", r"\p{Zs}\t")
    }

    /// Line breaks: LF, VT, FF, CR, NEL, LS, PS.
    pub fn newlines() -> Self {
        Self::preset("newlines", r"\n\x0B\x0C\r\x{85}\x{2028}\x{2029}")
    }

    /// All separators plus line breaks.
    pub fn whitespaces_and_newlines() -> Self {
        Self::preset("whitespaces_and_newlines", r"\p{Z}\t\n\x0B\x0C\r\x{85}")
    }

    /// A class made of exactly the characters in `chars`.
    ///
    /// An empty string yields a class that matches nothing.
    pub fn from_chars(chars: &str) -> Self {
        if chars.is_empty() {
            // Disjoint intersection: `[..]` never matches, `[^..]` matches all.
            return Self::preset("chars()", r"\x{0}&&\x{1}");
        }
        let body: String = chars
            .chars()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        Self::preset(&format!("chars({chars})"), &body)
    }

    /// A class from a raw regex class body such as `a-f0-9` or `\p{Greek}`.
    pub fn from_pattern(body: &str) -> Result<Self, regex::Error> {
        Self::from_class_body(&format!("pattern({body})"), body)
    }

    /// The union of two classes.
    pub fn union(&self, other: &Self) -> Result<Self, regex::Error> {
        Self::from_class_body(
            &format!("{}|{}", self.name, other.name),
            &format!("[{}][{}]", self.body, other.body),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, c: char) -> bool {
        self.member.is_match(c.encode_utf8(&mut [0; 4]))
    }

    /// Number of characters of `input` that belong to the class.
    pub fn count_in(&self, input: &str) -> usize {
        self.member.find_iter(input).count()
    }

    /// `input` with every member character removed.
    pub fn strip(&self, input: &str) -> String {
        self.member.replace_all(input, "").into_owned()
    }

    /// Whether every character of `input` belongs to the class.
    /// Vacuously `true` for an empty string.
    pub fn all_in(&self, input: &str) -> bool {
        !self.outsider.is_match(input)
    }

    /// Whether any character of `input` belongs to the class.
    pub fn any_in(&self, input: &str) -> bool {
        self.member.is_match(input)
    }
}

/// Whether `body` contains an unescaped `]` that would end the enclosing
/// `[...]` before the body does.
///
/// A `]` right after an opening bracket (or after `[^`) is a literal, as in
/// `[]a]`.
fn closes_early(body: &str) -> bool {
    let mut chars = body.chars().peekable();
    let mut depth = 0_usize;
    let mut literal_bracket = true;
    if chars.peek() == Some(&'^') {
        chars.next();
    }
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' => {
                depth += 1;
                if chars.peek() == Some(&'^') {
                    chars.next();
                }
                literal_bracket = true;
                continue;
            }
            ']' if literal_bracket => {}
            ']' if depth == 0 => return true,
            ']' => depth -= 1,
            _ => {}
        }
        literal_bracket = false;
    }
    false
}

impl fmt::Debug for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CharacterClass").field(&self.name).finish()
    }
}

impl PartialEq for CharacterClass {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

// ============================================================================
// TESTS
// ============================================================================
