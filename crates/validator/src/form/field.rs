//! Tracked form fields
//!
//! A [`Field`] owns everything needed to validate one input: where its value
//! comes from, the rules, the last value that passed, and the handler that
//! receives each outcome.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Outcome, Rule, Value, satisfy_all};
use crate::form::InputSource;

/// Callback receiving every outcome a field produces.
pub type ValidationHandler = Arc<dyn Fn(&Outcome) + Send + Sync>;

/// Input events an adapter can relay to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// The input's value changed.
    Changed,
    /// The input lost focus.
    FocusLost,
}

/// Which input events trigger validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triggers {
    pub on_input_change: bool,
    pub on_focus_loss: bool,
}

impl Default for Triggers {
    fn default() -> Self {
        Self {
            on_input_change: true,
            on_focus_loss: false,
        }
    }
}

impl Triggers {
    pub fn fires_on(self, event: InputEvent) -> bool {
        match event {
            InputEvent::Changed => self.on_input_change,
            InputEvent::FocusLost => self.on_focus_loss,
        }
    }
}

/// One input tracked for validation.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let name = InputCell::new("Hello");
/// let mut field = Field::new(name.clone())
///     .with_rules(rules![StringLengthRule::min(3)]);
/// assert!(field.validate().is_success());
///
/// name.set("Hi");
/// let outcome = field.validate();
/// assert!(outcome.is_failure());
/// // The last passing value is carried instead of the rejected one.
/// assert_eq!(outcome.value(), &Value::from("Hello"));
/// ```
pub struct Field {
    source: Arc<dyn InputSource>,
    rules: Vec<Arc<dyn Rule>>,
    last_valid: Option<Value>,
    handler: Option<ValidationHandler>,
    triggers: Triggers,
}

impl Field {
    pub fn new(source: impl InputSource + 'static) -> Self {
        Self::shared(Arc::new(source))
    }

    pub fn shared(source: Arc<dyn InputSource>) -> Self {
        Self {
            source,
            rules: Vec::new(),
            last_valid: None,
            handler: None,
            triggers: Triggers::default(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: Vec<Arc<dyn Rule>>) -> Self {
        self.rules = rules;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn on_validate(mut self, handler: impl Fn(&Outcome) + Send + Sync + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_triggers(mut self, triggers: Triggers) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn set_rules(&mut self, rules: Vec<Arc<dyn Rule>>) {
        self.rules = rules;
    }

    pub fn set_handler(&mut self, handler: Option<ValidationHandler>) {
        self.handler = handler;
    }

    pub fn set_triggers(&mut self, triggers: Triggers) {
        self.triggers = triggers;
    }

    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    pub fn triggers(&self) -> Triggers {
        self.triggers
    }

    pub fn last_valid(&self) -> Option<&Value> {
        self.last_valid.as_ref()
    }

    /// The source's current value.
    pub fn current_value(&self) -> Value {
        self.source.input_value()
    }

    pub(crate) fn handler(&self) -> Option<&ValidationHandler> {
        self.handler.as_ref()
    }

    /// Runs every rule against the current value.
    ///
    /// A passing value becomes the new last valid value. A failing outcome
    /// carries the last valid value instead of the rejected input, when one
    /// exists. The field handler, if any, receives the outcome.
    pub fn validate(&mut self) -> Outcome {
        let outcome = self.evaluate();
        if let Some(handler) = &self.handler {
            handler(&outcome);
        }
        outcome
    }

    /// [`Field::validate`] without calling the handler.
    pub(crate) fn evaluate(&mut self) -> Outcome {
        let mut outcome = satisfy_all(self.source.input_value(), &self.rules);
        if outcome.is_success() {
            self.last_valid = Some(outcome.value().clone());
        } else if let Some(last) = &self.last_valid {
            outcome = outcome.with_value(last.clone());
        }
        outcome
    }

    /// Validates if `event` is one of the enabled triggers.
    pub fn notify(&mut self, event: InputEvent) -> Option<Outcome> {
        self.triggers.fires_on(event).then(|| self.validate())
    }

    /// Forgets the last valid value.
    pub fn reset(&mut self) {
        self.last_valid = None;
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("rules", &self.rules)
            .field("last_valid", &self.last_valid)
            .field("has_handler", &self.handler.is_some())
            .field("triggers", &self.triggers)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
