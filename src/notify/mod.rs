//! Notifications - user-facing events raised by the directory.
//!
//! The directory never talks to a UI directly. It raises [`Notice`]s
//! through an injected [`Notifier`]; a front end decides whether to show a
//! toast, a banner, or nothing.

mod connectivity;
#[cfg(feature = "emitter")]
mod emitter;
mod notifier;

use serde::{Deserialize, Serialize};

pub use connectivity::ConnectivityMonitor;
#[cfg(feature = "emitter")]
pub use emitter::EmitterNotifier;
pub use notifier::{BufferNotifier, LogNotifier, Notifier, NullNotifier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Notice {
    CatalogLoaded { count: usize },
    CatalogLoadFailed { message: String },
    BookmarkAdded { id: String, title: String },
    BookmarkRemoved { id: String, title: String },
    BookmarksLoadFailed { message: String },
    BookmarksSaveFailed { message: String },
    FiltersCleared,
    ConnectivityChanged { online: bool },
}

impl Notice {
    /// Event name, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Notice::CatalogLoaded { .. } => "catalogLoaded",
            Notice::CatalogLoadFailed { .. } => "catalogLoadFailed",
            Notice::BookmarkAdded { .. } => "bookmarkAdded",
            Notice::BookmarkRemoved { .. } => "bookmarkRemoved",
            Notice::BookmarksLoadFailed { .. } => "bookmarksLoadFailed",
            Notice::BookmarksSaveFailed { .. } => "bookmarksSaveFailed",
            Notice::FiltersCleared => "filtersCleared",
            Notice::ConnectivityChanged { .. } => "connectivityChanged",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::CatalogLoadFailed { .. }
                | Notice::BookmarksLoadFailed { .. }
                | Notice::BookmarksSaveFailed { .. }
                | Notice::ConnectivityChanged { online: false }
        )
    }
}
