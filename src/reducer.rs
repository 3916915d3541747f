//! Pure state transitions for the wizard stores.
//!
//! Stores never mutate their value in place. A write becomes an action,
//! the reducer turns `(state, action)` into the next state, and the
//! [`Observable`] publishes it.

use std::fmt::Debug;

use crate::observable::Observable;

/// `(state, action) -> state` for one store.
pub trait Reducer {
    type State: Clone + Send + 'static;
    type Action: Debug;

    /// Store name used in log lines.
    const STORE: &'static str;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State;

    /// Apply `action` to the value held by `state` and notify its observers.
    ///
    /// The read, the transition and the write happen under one lock, so
    /// dispatches through cloned store handles are never lost.
    fn dispatch(state: &Observable<Self::State>, action: Self::Action) {
        tracing::trace!(store = Self::STORE, action = ?action, "Dispatch");
        state.update(|current| Self::reduce(current, action));
    }
}
