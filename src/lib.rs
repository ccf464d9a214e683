//! Volunteer opportunity directory core.
//!
//! A read-only [`Catalog`] of [`Opportunity`] records is fetched once from a
//! [`CatalogSource`]. [`visible_opportunities`] selects what a user sees
//! from the catalog, the selected [`FilterCriteria`], the user's
//! [`BookmarkSet`], and a free-text query. Bookmarks persist through a
//! [`BookmarkStore`] over any [`KeyValueStorage`]. [`Directory`] wires it
//! all into a single session.

mod bookmark;
mod catalog;
mod config;
mod directory;
mod filter;
mod notify;
mod opportunity;
mod storage;

pub use bookmark::{BookmarkAction, BookmarkChange, BookmarkSet, BookmarkStore, DEFAULT_STORAGE_KEY};
pub use catalog::{Catalog, CatalogError, CatalogLoader, CatalogSource, LoadState, StaticCatalogSource};
pub use config::{ConfigError, DirectoryConfig};
pub use directory::Directory;
pub use filter::{
    active_filters, apply_search, filter_opportunities, has_active_filters, matches_criteria,
    visible_opportunities, ActiveFilter, DateRange, FilterCriteria, SearchQuery,
};
#[cfg(feature = "emitter")]
pub use notify::EmitterNotifier;
pub use notify::{BufferNotifier, ConnectivityMonitor, LogNotifier, Notice, Notifier, NullNotifier};
pub use opportunity::Opportunity;
pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage, StorageError};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
