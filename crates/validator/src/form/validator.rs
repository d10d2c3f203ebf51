//! Form aggregation
//!
//! [`FormValidator`] tracks one [`Field`] per key together with the field's
//! latest outcome. Every recomputation folds all stored outcomes with
//! [`Outcome::merge`], in key order, into one form outcome and hands it to
//! the form handler.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::combinators::merge_all;
use crate::form::{Field, InputEvent, ValidationHandler};
use crate::foundation::Outcome;

/// Callback receiving every delivered form outcome.
pub type FormHandler<K> = Arc<dyn Fn(&Outcome<Vec<K>>) + Send + Sync>;

struct Entry {
    field: Field,
    latest: Outcome,
}

/// Aggregates per-field outcomes into one form outcome.
///
/// The form outcome carries the tracked keys, in key order, as its value.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let mut form = FormValidator::new();
/// form.add("name", Field::new(InputCell::new("Hello")).with_rule(StringLengthRule::min(8)));
/// form.add("city", Field::new(InputCell::new("Holas")).with_rule(StringLengthRule::max(10)));
///
/// let outcome = form.validate_form();
/// assert_eq!(outcome.errors(), &[ValidationError::ShorterThanMinimumLength]);
/// assert_eq!(outcome.value(), &vec!["city", "name"]);
/// ```
pub struct FormValidator<K> {
    entries: BTreeMap<K, Entry>,
    handler: Option<FormHandler<K>>,
}

impl<K: Ord + Clone> FormValidator<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            handler: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_handler(mut self, handler: impl Fn(&Outcome<Vec<K>>) + Send + Sync + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn set_handler(&mut self, handler: Option<FormHandler<K>>) {
        self.handler = handler;
    }

    /// Starts tracking `field` under `key` and computes its first outcome.
    ///
    /// Returns `false` without touching anything if `key` is already tracked.
    pub fn add(&mut self, key: K, field: Field) -> bool {
        let (added, pending) = self.add_deferred(key, field);
        pending.dispatch();
        added
    }

    pub(crate) fn add_deferred(&mut self, key: K, mut field: Field) -> (bool, Pending<K>) {
        let mut pending = Pending::default();
        if self.entries.contains_key(&key) {
            return (false, pending);
        }
        let latest = field.evaluate();
        pending.field(&field, &latest);
        debug!(
            fields = self.entries.len() + 1,
            success = latest.is_success(),
            "form field added"
        );
        self.entries.insert(key, Entry { field, latest });
        (true, pending)
    }

    /// Stops tracking `key`, dropping its stored outcome.
    pub fn remove(&mut self, key: &K) -> Option<Field> {
        let entry = self.entries.remove(key)?;
        debug!(fields = self.entries.len(), "form field removed");
        Some(entry.field)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tracked keys in key order.
    pub fn keys(&self) -> Vec<K> {
        self.entries.keys().cloned().collect()
    }

    pub fn field(&self, key: &K) -> Option<&Field> {
        self.entries.get(key).map(|entry| &entry.field)
    }

    pub fn field_mut(&mut self, key: &K) -> Option<&mut Field> {
        self.entries.get_mut(key).map(|entry| &mut entry.field)
    }

    /// The stored outcome of one field.
    pub fn latest(&self, key: &K) -> Option<&Outcome> {
        self.entries.get(key).map(|entry| &entry.latest)
    }

    /// Relays an input event to the field under `key`.
    ///
    /// If the field's triggers accept the event, its outcome is recomputed
    /// and stored, and the folded form outcome is delivered and returned.
    /// Returns `None` for unknown keys and ignored events.
    pub fn field_changed(&mut self, key: &K, event: InputEvent) -> Option<Outcome<Vec<K>>> {
        let (outcome, pending) = self.field_changed_deferred(key, event);
        pending.dispatch();
        outcome
    }

    #[instrument(skip_all, fields(event = ?event))]
    pub(crate) fn field_changed_deferred(
        &mut self,
        key: &K,
        event: InputEvent,
    ) -> (Option<Outcome<Vec<K>>>, Pending<K>) {
        let mut pending = Pending::default();
        let Some(entry) = self.entries.get_mut(key) else {
            return (None, pending);
        };
        if !entry.field.triggers().fires_on(event) {
            return (None, pending);
        }
        entry.latest = entry.field.evaluate();
        pending.field(&entry.field, &entry.latest);
        (Some(self.deliver(&mut pending)), pending)
    }

    /// Stores an outcome computed elsewhere for the field under `key`, then
    /// folds and delivers. Returns `None` for unknown keys.
    pub fn record(&mut self, key: &K, outcome: Outcome) -> Option<Outcome<Vec<K>>> {
        let (outcome, pending) = self.record_deferred(key, outcome);
        pending.dispatch();
        outcome
    }

    #[instrument(skip_all)]
    pub(crate) fn record_deferred(
        &mut self,
        key: &K,
        outcome: Outcome,
    ) -> (Option<Outcome<Vec<K>>>, Pending<K>) {
        let mut pending = Pending::default();
        let Some(entry) = self.entries.get_mut(key) else {
            return (None, pending);
        };
        entry.latest = outcome;
        (Some(self.deliver(&mut pending)), pending)
    }

    /// Recomputes every field, then folds and delivers.
    pub fn validate_form(&mut self) -> Outcome<Vec<K>> {
        let (outcome, pending) = self.validate_form_deferred();
        pending.dispatch();
        outcome
    }

    #[instrument(skip_all, fields(fields = self.entries.len()))]
    pub(crate) fn validate_form_deferred(&mut self) -> (Outcome<Vec<K>>, Pending<K>) {
        let mut pending = Pending::default();
        for entry in self.entries.values_mut() {
            entry.latest = entry.field.evaluate();
            pending.field(&entry.field, &entry.latest);
        }
        (self.deliver(&mut pending), pending)
    }

    /// Folds the stored outcomes without recomputing or delivering.
    pub fn current(&self) -> Outcome<Vec<K>> {
        merge_all(
            Outcome::succeed(self.keys()),
            self.entries.values().map(|entry| &entry.latest),
        )
    }

    fn deliver(&self, pending: &mut Pending<K>) -> Outcome<Vec<K>> {
        let outcome = self.current();
        debug!(
            fields = self.entries.len(),
            success = outcome.is_success(),
            errors = outcome.errors().len(),
            "form outcome delivered"
        );
        if let Some(handler) = &self.handler {
            pending.form = Some((Arc::clone(handler), outcome.clone()));
        }
        outcome
    }
}

/// Handler calls collected while the form is borrowed.
///
/// [`Pending::dispatch`] runs them once the borrow (or the lock of a
/// [`SharedFormValidator`](crate::form::SharedFormValidator)) is released,
/// so handlers may read the form again.
#[must_use = "pending handler calls must be dispatched"]
pub(crate) struct Pending<K> {
    fields: Vec<(ValidationHandler, Outcome)>,
    form: Option<(FormHandler<K>, Outcome<Vec<K>>)>,
}

impl<K> Default for Pending<K> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            form: None,
        }
    }
}

impl<K> Pending<K> {
    fn field(&mut self, field: &Field, outcome: &Outcome) {
        if let Some(handler) = field.handler() {
            self.fields.push((Arc::clone(handler), outcome.clone()));
        }
    }

    /// Field handlers first, in key order, then the form handler.
    pub(crate) fn dispatch(self) {
        for (handler, outcome) in &self.fields {
            handler(outcome);
        }
        if let Some((handler, outcome)) = &self.form {
            handler(outcome);
        }
    }
}

impl<K: Ord + Clone> Default for FormValidator<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for FormValidator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValidator")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .field("has_handler", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
