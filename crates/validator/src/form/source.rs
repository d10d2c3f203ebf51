//! Input sources: where a field reads its current value from

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::foundation::{Validatable, Value};

/// A synchronous getter for the value a field currently holds.
///
/// Implemented for closures returning a [`Value`] and for [`InputCell`].
pub trait InputSource: Send + Sync {
    fn input_value(&self) -> Value;
}

impl<F> InputSource for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn input_value(&self) -> Value {
        self()
    }
}

/// A shared, mutable value slot standing in for a live input widget.
///
/// Clones share the same slot, so a rule holding one clone observes writes
/// made through another.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::form::{InputCell, InputSource};
///
/// let password = InputCell::new("secret");
/// let view = password.clone();
/// password.set("changed");
/// assert_eq!(view.input_value(), "changed".into());
/// ```
#[derive(Clone, Default)]
pub struct InputCell {
    slot: Arc<RwLock<Value>>,
}

impl InputCell {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(value.into())),
        }
    }

    /// Replaces the held value.
    pub fn set(&self, value: impl Into<Value>) {
        *self.slot.write() = value.into();
    }

    pub fn get(&self) -> Value {
        self.slot.read().clone()
    }

    /// Whether both handles share one slot.
    pub fn same_slot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl InputSource for InputCell {
    fn input_value(&self) -> Value {
        self.get()
    }
}

impl Validatable for InputCell {
    fn input_value(&self) -> Value {
        self.get()
    }
}

impl fmt::Debug for InputCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InputCell").field(&*self.slot.read()).finish()
    }
}
