//! Thread-safe form handle

use std::sync::Arc;

use parking_lot::Mutex;

use crate::form::validator::Pending;
use crate::form::{Field, FormHandler, FormValidator, InputEvent};
use crate::foundation::Outcome;

/// A cloneable handle to one [`FormValidator`] behind a mutex.
///
/// Adds, removals, recomputations and folds each run under the lock and
/// never interleave. Field and form handlers run after the lock is
/// released, so a handler may call back into the same form.
pub struct SharedFormValidator<K> {
    inner: Arc<Mutex<FormValidator<K>>>,
}

impl<K> Clone for SharedFormValidator<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Ord + Clone> SharedFormValidator<K> {
    pub fn new(form: FormValidator<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(form)),
        }
    }

    pub fn add(&self, key: K, field: Field) -> bool {
        self.unlocked_dispatch(|form| form.add_deferred(key, field))
    }

    pub fn remove(&self, key: &K) -> Option<Field> {
        self.inner.lock().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn set_handler(&self, handler: Option<FormHandler<K>>) {
        self.inner.lock().set_handler(handler);
    }

    pub fn field_changed(&self, key: &K, event: InputEvent) -> Option<Outcome<Vec<K>>> {
        self.unlocked_dispatch(|form| form.field_changed_deferred(key, event))
    }

    pub fn record(&self, key: &K, outcome: Outcome) -> Option<Outcome<Vec<K>>> {
        self.unlocked_dispatch(|form| form.record_deferred(key, outcome))
    }

    pub fn validate_form(&self) -> Outcome<Vec<K>> {
        self.unlocked_dispatch(FormValidator::validate_form_deferred)
    }

    pub fn current(&self) -> Outcome<Vec<K>> {
        self.inner.lock().current()
    }

    /// Runs `f` with exclusive access to the form.
    ///
    /// Handlers triggered inside `f` run while the lock is held and must not
    /// touch this handle.
    pub fn with_lock<T>(&self, f: impl FnOnce(&mut FormValidator<K>) -> T) -> T {
        f(&mut self.inner.lock())
    }

    fn unlocked_dispatch<T>(&self, f: impl FnOnce(&mut FormValidator<K>) -> (T, Pending<K>)) -> T {
        let (result, pending) = {
            let mut form = self.inner.lock();
            f(&mut form)
        };
        pending.dispatch();
        result
    }
}

impl<K: Ord + Clone> Default for SharedFormValidator<K> {
    fn default() -> Self {
        Self::new(FormValidator::new())
    }
}

impl<K: Ord + Clone> From<FormValidator<K>> for SharedFormValidator<K> {
    fn from(form: FormValidator<K>) -> Self {
        Self::new(form)
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for SharedFormValidator<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedFormValidator").field(&*self.inner.lock()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InputCell;
    use crate::foundation::ValidationError;
    use crate::rules::StringLengthRule;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn handle_is_send_and_sync() {
        assert_send_sync::<SharedFormValidator<String>>();
    }

    #[test]
    fn concurrent_adds_are_serialized() {
        let form = SharedFormValidator::<usize>::default();
        let handles: Vec<_> = (0..8)
            .map(|key| {
                let form = form.clone();
                thread::spawn(move || {
                    let text = if key % 2 == 0 { "long enough" } else { "no" };
                    let field = Field::new(InputCell::new(text)).with_rule(StringLengthRule::min(5));
                    assert!(form.add(key, field));
                    let _ = form.validate_form();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(form.len(), 8);
        let outcome = form.current();
        assert_eq!(outcome.value(), &(0..8).collect::<Vec<_>>());
        assert_eq!(
            outcome.errors(),
            vec![ValidationError::ShorterThanMinimumLength; 4].as_slice()
        );
    }

    #[test]
    fn handlers_can_read_the_form_they_observe() {
        let form = SharedFormValidator::<u8>::default();
        let (tx, rx) = mpsc::channel();

        let observer = form.clone();
        let field_observer = form.clone();
        form.set_handler(Some(Arc::new(move |outcome: &Outcome<Vec<u8>>| {
            let _ = tx.send((observer.len(), outcome.is_success()));
        })));
        let seen_fields = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen_fields);
        let name = InputCell::new("Hello");
        assert!(form.add(
            1,
            Field::new(name.clone())
                .with_rule(StringLengthRule::min(3))
                .on_validate(move |_| sink.lock().push(field_observer.contains(&1))),
        ));

        let worker = form.clone();
        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            name.set("Hi");
            let changed = worker.field_changed(&1, InputEvent::Changed);
            let validated = worker.validate_form();
            let _ = done_tx.send((changed.map(|o| o.is_success()), validated.is_success()));
        });

        let finished = done_rx.recv_timeout(Duration::from_secs(3));
        assert_eq!(finished, Ok((Some(false), false)));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![(1, false), (1, false)]);
        assert_eq!(*seen_fields.lock(), vec![true, true, true]);
    }

    #[test]
    fn with_lock_exposes_the_form() {
        let form = SharedFormValidator::from(FormValidator::new());
        form.add("name", Field::new(InputCell::new("Hello")));
        assert_eq!(form.with_lock(|inner| inner.keys()), vec!["name"]);
        assert!(form.remove(&"name").is_some());
        assert!(form.is_empty());
    }
}
