//! Outcome combinators
//!
//! - [`Outcome::and`]: all must pass, errors accumulate after the first failure
//! - [`Outcome::or`]: first pass wins, earlier errors are kept
//! - [`Outcome::merge`]: joins outcomes of different fields
//!
//! [`Outcome::and`]: crate::foundation::Outcome::and
//! [`Outcome::or`]: crate::foundation::Outcome::or
//! [`Outcome::merge`]: crate::foundation::Outcome::merge

mod and;
mod merge;
mod or;

pub use merge::merge_all;
pub use crate::foundation::{satisfy_all, satisfy_any};
