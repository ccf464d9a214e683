//! Durable key-value storage - the named-slot persistence bookmarks live in.
//!
//! The [`KeyValueStorage`] trait stands in for a browser's local storage:
//! string values under string keys, read at startup and overwritten on
//! every change. Two backends ship with the crate:
//!
//! - [`InMemoryStorage`] for tests and embedded use; an optional byte
//!   quota simulates a full store.
//! - [`FileStorage`], a JSON file holding every slot, durable across runs.

mod error;
mod file;
mod in_memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use in_memory::InMemoryStorage;

/// Named-slot string storage.
pub trait KeyValueStorage: Send + Sync {
    /// Read a slot. `Ok(None)` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write (or overwrite) a slot.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Returns true if one existed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key)
    }
}
