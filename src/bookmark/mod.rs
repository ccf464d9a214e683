//! Bookmarks - the user's favorite opportunities, by id.
//!
//! [`BookmarkSet`] is a plain value: toggling returns a new set and never
//! mutates the original. [`BookmarkStore`] moves sets in and out of a
//! [`KeyValueStorage`](crate::KeyValueStorage) slot and absorbs every
//! storage failure, so the in-memory set stays usable for the session.

mod store;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use store::{BookmarkStore, DEFAULT_STORAGE_KEY};

/// A set of bookmarked opportunity ids.
///
/// Serializes as a JSON array of id strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkSet {
    ids: BTreeSet<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
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

    /// A copy with `id` removed if present, added if absent.
    pub fn toggled(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(id) {
            ids.insert(id.to_string());
        }
        Self { ids }
    }
}

impl<T: Into<String>> FromIterator<T> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkAction {
    Added,
    Removed,
}

/// The outcome of a toggle: the new set and what happened to the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkChange {
    pub bookmarks: BookmarkSet,
    pub id: String,
    pub action: BookmarkAction,
    /// False when the new set could not be written to storage.
    pub persisted: bool,
}
