//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use style_wizard::observable::Subscription;
use tempfile::TempDir;

/// Values delivered to an observer, in delivery order.
pub type Seen<T> = Arc<Mutex<Vec<T>>>;

/// Subscribe a recorder through `subscribe` and return what it captures.
pub fn record<T, S>(subscribe: S) -> (Seen<T>, Subscription)
where
    T: Clone + Send + 'static,
    S: FnOnce(Box<dyn FnMut(&T) + Send>) -> Subscription,
{
    let seen: Seen<T> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = subscribe(Box::new(move |value: &T| sink.lock().push(value.clone())));
    (seen, sub)
}

/// Write `content` to a catalog file in a fresh temp dir.
pub fn temp_catalog(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.toml");
    std::fs::write(&path, content).expect("Failed to write catalog");
    (temp_dir, path)
}

/// `[[archetypes]]` entries covering the numeric and endnote classes, for
/// catalog files that only care about the other classes.
pub const NUMERIC_AND_ENDNOTE_ARCHETYPES: &str = r#"
[[archetypes]]
id = "ieee"
label = "IEEE"
class = "numeric"

[[archetypes]]
id = "turabian-endnotes"
label = "Turabian (endnotes)"
class = "endnote"
"#;
