use crate::bookmarks::action::BookmarkAction;
use crate::bookmarks::reducer::BookmarkReducer;
use crate::bookmarks::state::Bookmarks;
use crate::observable::{Observable, Subscription};
use crate::reducer::Reducer;

/// Observable holder of the session's bookmarks.
#[derive(Clone)]
pub struct BookmarkStore {
    state: Observable<Bookmarks>,
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: Observable::new(Bookmarks::new()),
        }
    }

    pub fn get(&self) -> Bookmarks {
        self.state.get()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get().contains(id)
    }

    /// Register an observer; it immediately receives the current bookmarks.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&Bookmarks) + Send + 'static,
    {
        self.state.subscribe(observer)
    }

    /// Flip membership of `id` and notify subscribers.
    pub fn toggle(&self, id: &str) {
        tracing::debug!(id = %id, "Bookmark toggled");
        let action = BookmarkAction::Toggle(id.to_string());
        BookmarkReducer::dispatch(&self.state, action);
    }
}
