//! Directory - one user's browsing session over a catalog.
//!
//! The directory owns everything a front end would otherwise keep in view
//! state: the loaded catalog, the bookmark set, the selected criteria, and
//! the search text. Every query recomputes from those inputs, so results
//! always reflect the latest edits.
//!
//! ## Example
//!
//! ```ignore
//! use volunteer_directory::{Directory, InMemoryStorage, StaticCatalogSource};
//!
//! let mut directory = Directory::new(InMemoryStorage::new(), StaticCatalogSource::sample()?);
//! directory.start().await?;
//!
//! directory.criteria_mut().set_cause("Environment", true);
//! directory.set_search("beach");
//! for opp in directory.visible() {
//!     println!("{} - {}", opp.title, opp.organization);
//! }
//!
//! directory.toggle_bookmark("1");
//! ```

use std::sync::Arc;

use crate::bookmark::{BookmarkAction, BookmarkChange, BookmarkSet, BookmarkStore};
use crate::catalog::{Catalog, CatalogError, CatalogLoader, CatalogSource, LoadState};
use crate::config::DirectoryConfig;
use crate::filter::{self, ActiveFilter, FilterCriteria};
use crate::notify::{Notice, Notifier, NullNotifier};
use crate::opportunity::Opportunity;
use crate::storage::KeyValueStorage;

pub struct Directory<S, C> {
    store: BookmarkStore<S>,
    loader: CatalogLoader<C>,
    bookmarks: BookmarkSet,
    criteria: FilterCriteria,
    search_text: String,
    notifier: Arc<dyn Notifier>,
}

impl<S: KeyValueStorage, C: CatalogSource> Directory<S, C> {
    pub fn new(storage: S, source: C) -> Self {
        Self::with_store(BookmarkStore::new(storage), source)
    }

    pub fn from_config(storage: S, source: C, config: &DirectoryConfig) -> Self {
        Self::with_store(BookmarkStore::from_config(storage, config), source)
    }

    fn with_store(store: BookmarkStore<S>, source: C) -> Self {
        Self {
            store,
            loader: CatalogLoader::new(source),
            bookmarks: BookmarkSet::new(),
            criteria: FilterCriteria::default(),
            search_text: String::new(),
            notifier: Arc::new(NullNotifier),
        }
    }

    /// Route every notice raised by the session, its store, and its loader
    /// to `notifier`.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.store = self.store.with_notifier(notifier.clone());
        self.loader = self.loader.with_notifier(notifier.clone());
        self.notifier = notifier;
        self
    }

    /// Load persisted bookmarks, then fetch the catalog.
    ///
    /// Bookmarks are available even if the catalog fetch fails.
    pub async fn start(&mut self) -> Result<(), CatalogError> {
        self.bookmarks = self.store.load();
        self.reload().await
    }

    /// Fetch the catalog again. Used for retries after a failed load.
    pub async fn reload(&mut self) -> Result<(), CatalogError> {
        self.loader.load().await.map(|_| ())
    }

    pub fn load_state(&self) -> &LoadState {
        self.loader.state()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.loader.catalog()
    }

    /// Details for a single opportunity.
    pub fn opportunity(&self, id: &str) -> Option<&Opportunity> {
        self.catalog().and_then(|catalog| catalog.get(id))
    }

    /// Causes offered by the loaded catalog, in first-seen order.
    pub fn causes(&self) -> Vec<&str> {
        self.catalog().map(Catalog::causes).unwrap_or_default()
    }

    /// Commitment levels offered by the loaded catalog, in first-seen order.
    pub fn commitment_levels(&self) -> Vec<&str> {
        self.catalog()
            .map(Catalog::commitment_levels)
            .unwrap_or_default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Reset criteria and search text.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.search_text.clear();
        self.notifier.notify(&Notice::FiltersCleared);
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    /// Flip a bookmark and persist the new set right away.
    ///
    /// The in-memory set changes even when the write fails. A failed write
    /// raises only the store's save-failure notice.
    pub fn toggle_bookmark(&mut self, id: &str) -> BookmarkChange {
        let change = self.store.toggle_and_persist(&self.bookmarks, id);
        self.bookmarks = change.bookmarks.clone();
        if !change.persisted {
            return change;
        }

        if let Some(opp) = self.opportunity(id) {
            let notice = match change.action {
                BookmarkAction::Added => Notice::BookmarkAdded {
                    id: opp.id.clone(),
                    title: opp.title.clone(),
                },
                BookmarkAction::Removed => Notice::BookmarkRemoved {
                    id: opp.id.clone(),
                    title: opp.title.clone(),
                },
            };
            self.notifier.notify(&notice);
        }

        change
    }

    /// What the user should see right now. Empty until a catalog loads.
    pub fn visible(&self) -> Vec<&Opportunity> {
        match self.catalog() {
            Some(catalog) => filter::visible_opportunities(
                catalog,
                &self.criteria,
                &self.bookmarks,
                &self.search_text,
            ),
            None => Vec::new(),
        }
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        filter::active_filters(&self.criteria, &self.search_text)
    }

    pub fn has_active_filters(&self) -> bool {
        filter::has_active_filters(&self.criteria, &self.search_text)
    }
}
