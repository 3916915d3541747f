use serde::{Deserialize, Serialize};

/// Insertion-ordered set of bookmarked style ids.
///
/// Each id appears at most once; only [`toggle`](Self::toggle) mutates it.
/// Serialized as a plain JSON array; repeats in loaded data are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Bookmarks {
    ids: Vec<String>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, otherwise append it.
    ///
    /// Returns `true` when the id is bookmarked afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id.to_string());
                true
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Bookmarks {
    /// Collects ids, dropping repeats after their first occurrence.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut bookmarks = Bookmarks::new();
        for id in iter {
            if !bookmarks.contains(&id) {
                bookmarks.ids.push(id);
            }
        }
        bookmarks
    }
}

impl From<Vec<String>> for Bookmarks {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<Bookmarks> for Vec<String> {
    fn from(bookmarks: Bookmarks) -> Self {
        bookmarks.ids
    }
}
