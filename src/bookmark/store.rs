//! BookmarkStore - loads and persists the bookmark set through a storage slot.

use std::sync::Arc;

use crate::config::DirectoryConfig;
use crate::notify::{Notice, Notifier, NullNotifier};
use crate::storage::{KeyValueStorage, StorageError};

use super::{BookmarkAction, BookmarkChange, BookmarkSet};

/// Storage slot used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "bookmarkedOpportunities";

/// Reads and writes the bookmark set.
///
/// Neither [`load`](Self::load) nor [`persist`](Self::persist) ever returns
/// an error: a missing or unparseable slot loads as an empty set, and a
/// failed write is logged and reported through the notifier.
pub struct BookmarkStore<S> {
    storage: S,
    key: String,
    notifier: Arc<dyn Notifier>,
}

impl<S: KeyValueStorage> BookmarkStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: DEFAULT_STORAGE_KEY.to_string(),
            notifier: Arc::new(NullNotifier),
        }
    }

    pub fn from_config(storage: S, config: &DirectoryConfig) -> Self {
        Self::new(storage).with_key(config.storage_key.clone())
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted set, or an empty one if there is none or it is
    /// unreadable. A blank slot counts as no set at all.
    pub fn load(&self) -> BookmarkSet {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return BookmarkSet::new(),
            Err(e) => {
                self.report_load_failure(e.to_string());
                return BookmarkSet::new();
            }
        };

        match serde_json::from_str::<BookmarkSet>(&raw) {
            Ok(bookmarks) => {
                tracing::debug!(key = %self.key, count = bookmarks.len(), "loaded bookmarks");
                bookmarks
            }
            Err(e) => {
                self.report_load_failure(e.to_string());
                BookmarkSet::new()
            }
        }
    }

    /// Pure toggle: `current` is left untouched.
    pub fn toggle(&self, current: &BookmarkSet, id: &str) -> BookmarkSet {
        current.toggled(id)
    }

    /// Overwrite the slot with `bookmarks`. Returns false if the write
    /// failed; the failure has already been logged and reported.
    pub fn persist(&self, bookmarks: &BookmarkSet) -> bool {
        match self.try_persist(bookmarks) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to persist bookmarks");
                self.notifier.notify(&Notice::BookmarksSaveFailed {
                    message: e.to_string(),
                });
                false
            }
        }
    }

    /// Toggle `id` and immediately persist the result.
    pub fn toggle_and_persist(&self, current: &BookmarkSet, id: &str) -> BookmarkChange {
        let action = if current.contains(id) {
            BookmarkAction::Removed
        } else {
            BookmarkAction::Added
        };

        let bookmarks = self.toggle(current, id);
        let persisted = self.persist(&bookmarks);

        BookmarkChange {
            bookmarks,
            id: id.to_string(),
            action,
            persisted,
        }
    }

    fn try_persist(&self, bookmarks: &BookmarkSet) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(bookmarks).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.storage.set(&self.key, &raw)
    }

    fn report_load_failure(&self, message: String) {
        tracing::warn!(key = %self.key, error = %message, "failed to load bookmarks");
        self.notifier
            .notify(&Notice::BookmarksLoadFailed { message });
    }
}

impl<S> std::fmt::Debug for BookmarkStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("key", &self.key)
            .finish()
    }
}
