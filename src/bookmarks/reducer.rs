use crate::bookmarks::action::BookmarkAction;
use crate::bookmarks::state::Bookmarks;
use crate::reducer::Reducer;

pub struct BookmarkReducer;

impl Reducer for BookmarkReducer {
    type State = Bookmarks;
    type Action = BookmarkAction;

    const STORE: &'static str = "bookmarks";

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            BookmarkAction::Toggle(id) => {
                state.toggle(&id);
                state
            }
        }
    }
}
