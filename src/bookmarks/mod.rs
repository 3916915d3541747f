//! Bookmarked style identifiers.

mod action;
mod reducer;
mod state;
mod store;

pub use action::BookmarkAction;
pub use reducer::BookmarkReducer;
pub use state::Bookmarks;
pub use store::BookmarkStore;
