//! Form aggregation
//!
//! - [`InputSource`], [`InputCell`]: where a field reads its value
//! - [`Field`]: one input with its rules, last valid value and handler
//! - [`FormValidator`]: folds per-field outcomes into one form outcome
//! - [`SharedFormValidator`]: the same behind a mutex, for use across threads

mod field;
mod shared;
mod source;
mod validator;

pub use field::{Field, InputEvent, Triggers, ValidationHandler};
pub use shared::SharedFormValidator;
pub use source::{InputCell, InputSource};
pub use validator::{FormHandler, FormValidator};
