//! CatalogLoader - tracks a catalog fetch through its lifecycle.

use std::sync::Arc;

use crate::notify::{Notice, Notifier, NullNotifier};

use super::{Catalog, CatalogError, CatalogSource};

/// Where a catalog load currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Catalog),
    Failed(CatalogError),
}

impl LoadState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Runs fetches against a [`CatalogSource`] and keeps the latest outcome.
///
/// There is no automatic retry; calling [`load`](Self::load) again after a
/// failure is the retry. Each completed load replaces the previous state.
pub struct CatalogLoader<C> {
    source: C,
    state: LoadState,
    generation: u64,
    notifier: Arc<dyn Notifier>,
}

impl<C: CatalogSource> CatalogLoader<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            state: LoadState::Idle,
            generation: 0,
            notifier: Arc::new(NullNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.state.catalog()
    }

    /// Number of loads that have completed, successfully or not.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    /// Fetch and validate the catalog.
    ///
    /// Dropping the returned future before it completes puts back whatever
    /// state the loader held before the call.
    pub async fn load(&mut self) -> Result<Catalog, CatalogError> {
        tracing::debug!(generation = self.generation + 1, "loading catalog");

        let pending = PendingLoad::begin(&mut self.state);
        let result = self.source.fetch().await.and_then(Catalog::new);
        pending.finish();
        self.generation += 1;

        match result {
            Ok(catalog) => {
                tracing::info!(count = catalog.len(), "catalog loaded");
                self.notifier.notify(&Notice::CatalogLoaded {
                    count: catalog.len(),
                });
                self.state = LoadState::Loaded(catalog.clone());
                Ok(catalog)
            }
            Err(err) => {
                tracing::warn!(error = %err, transient = err.is_transient(), "catalog load failed");
                self.notifier.notify(&Notice::CatalogLoadFailed {
                    message: err.to_string(),
                });
                self.state = LoadState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Forget any loaded catalog or error.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
    }
}

/// Holds the loader in `Loading` while a fetch is in flight.
///
/// If the fetch is cancelled the guard drops unfinished and restores the
/// previous state.
struct PendingLoad<'a> {
    state: &'a mut LoadState,
    previous: Option<LoadState>,
}

impl<'a> PendingLoad<'a> {
    fn begin(state: &'a mut LoadState) -> Self {
        let previous = std::mem::replace(state, LoadState::Loading);
        Self {
            state,
            previous: Some(previous),
        }
    }

    /// The fetch completed; the caller records the outcome.
    fn finish(mut self) {
        self.previous = None;
    }
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            tracing::debug!("catalog load cancelled");
            *self.state = previous;
        }
    }
}
