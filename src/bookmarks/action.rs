#[derive(Debug, Clone)]
pub enum BookmarkAction {
    /// Add the id if absent, remove it if present.
    Toggle(String),
}
