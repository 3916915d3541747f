//! Observable holder of the wizard's current [`StyleIntent`].

use serde_json::Value;

use crate::intent::action::IntentAction;
use crate::intent::model::{FieldUpdate, IntentError, StyleIntent};
use crate::intent::reducer::IntentReducer;
use crate::observable::{Observable, Subscription};
use crate::reducer::Reducer;

/// Holds exactly one current `StyleIntent` and mediates all reads and writes.
///
/// Cloning gives another handle to the same state. Every write notifies
/// subscribers exactly once, including writes that leave the value unchanged.
#[derive(Clone)]
pub struct IntentStore {
    state: Observable<StyleIntent>,
}

impl Default for IntentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentStore {
    /// Create a store holding the all-null initial record.
    pub fn new() -> Self {
        Self {
            state: Observable::new(StyleIntent::default()),
        }
    }

    /// Get a clone of the current intent.
    pub fn get(&self) -> StyleIntent {
        self.state.get()
    }

    /// Register an observer; it immediately receives the current intent.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&StyleIntent) + Send + 'static,
    {
        self.state.subscribe(observer)
    }

    /// Replace the entire intent.
    pub fn set(&self, intent: StyleIntent) {
        self.dispatch(IntentAction::Set(intent));
    }

    /// Replace a single field by name.
    ///
    /// # Errors
    /// `UnknownField` for a name outside the schema, `InvalidValue` when the
    /// value has the wrong type. State is unchanged and nobody is notified.
    pub fn update(&self, name: &str, value: Value) -> Result<(), IntentError> {
        let update = FieldUpdate::parse(name, value).inspect_err(|e| {
            tracing::warn!(field = %name, error = %e, "Rejected intent update");
        })?;
        self.update_field(update);
        Ok(())
    }

    /// Typed form of [`update`](Self::update).
    pub fn update_field(&self, update: FieldUpdate) {
        tracing::debug!(field = %update.field(), "Intent field updated");
        self.dispatch(IntentAction::Update(update));
    }

    /// Back to the initial all-null intent.
    pub fn reset(&self) {
        tracing::info!("Intent reset");
        self.dispatch(IntentAction::Reset);
    }

    /// Replace the intent from a JSON document.
    ///
    /// Documents written against an older schema are accepted; fields they
    /// lack become unanswered.
    pub fn load_json(&self, input: &str) -> Result<(), IntentError> {
        let intent = StyleIntent::from_json(input)?;
        self.set(intent);
        Ok(())
    }

    fn dispatch(&self, action: IntentAction) {
        IntentReducer::dispatch(&self.state, action);
    }
}
