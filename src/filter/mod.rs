//! Filtering - composable criteria plus free-text search over a catalog.
//!
//! Everything here is pure: the engine keeps no state between calls and
//! never mutates the records it is given. Results borrow from the catalog
//! and preserve its order.
//!
//! ## Example
//!
//! ```
//! use volunteer_directory::{visible_opportunities, BookmarkSet, Catalog, FilterCriteria};
//!
//! let catalog = Catalog::default();
//! let criteria = FilterCriteria::new().with_causes(["Environment"]);
//! let visible = visible_opportunities(&catalog, &criteria, &BookmarkSet::new(), "beach");
//! assert!(visible.is_empty());
//! ```

mod criteria;
mod engine;
mod search;

pub use criteria::{active_filters, has_active_filters, ActiveFilter, DateRange, FilterCriteria};
pub use engine::{apply_search, filter_opportunities, matches_criteria, visible_opportunities};
pub use search::SearchQuery;
