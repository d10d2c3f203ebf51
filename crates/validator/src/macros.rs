//! Macros for assembling rule lists.
//!
//! - [`rules!`]: a heterogeneous `Vec<Arc<dyn Rule>>`
//! - [`all_of!`]: AND-chain rules onto an outcome
//! - [`any_of!`]: OR-chain rules onto an outcome
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let password = rules![
//!     StringLengthRule::min(8),
//!     CharacterSetRule::contains_number(1, usize::MAX),
//!     RegexRule::has_upper_case(),
//! ];
//! assert!("Abc12345".satisfy_all(&password).is_success());
//! ```

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds a `Vec<Arc<dyn Rule>>` from rules of different types.
///
/// ```rust,ignore
/// let list = rules![StringLengthRule::min(3), RegexRule::email()];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<::std::sync::Arc<dyn $crate::foundation::Rule>>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![
            $(::std::sync::Arc::new($rule) as ::std::sync::Arc<dyn $crate::foundation::Rule>),+
        ]
    };
}

// ============================================================================
// ALL_OF / ANY_OF MACROS
// ============================================================================

/// Folds rules onto an outcome with `and`.
///
/// ```rust,ignore
/// let outcome = all_of!(Outcome::succeed("hello"); StringLengthRule::min(3), StringLengthRule::max(4));
/// ```
#[macro_export]
macro_rules! all_of {
    ($seed:expr; $($rule:expr),+ $(,)?) => {
        $seed$(.and(&$rule))+
    };
}

/// Folds rules onto an outcome with `or`.
///
/// ```rust,ignore
/// let outcome = any_of!(Outcome::fail("12345"); StringLengthRule::equal(4), StringLengthRule::equal(5));
/// ```
#[macro_export]
macro_rules! any_of {
    ($seed:expr; $($rule:expr),+ $(,)?) => {
        $seed$(.or(&$rule))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
