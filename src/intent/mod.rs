//! The style intent record and the store that owns it.
//!
//! A [`StyleIntent`] is the partially answered questionnaire behind the
//! style creation wizard. [`IntentStore`] holds the current value and pushes
//! every change to its subscribers.

mod action;
mod model;
mod reducer;
mod store;

pub use action::IntentAction;
pub use model::{CitationClass, FieldUpdate, IntentError, IntentField, StyleIntent, SCHEMA_VERSION};
pub use reducer::IntentReducer;
pub use store::IntentStore;
