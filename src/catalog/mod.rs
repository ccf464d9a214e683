//! Catalog loading - the read-only record set and the one-shot fetch that
//! produces it.
//!
//! ## Example
//!
//! ```ignore
//! use volunteer_directory::{CatalogLoader, StaticCatalogSource};
//!
//! let source = StaticCatalogSource::sample()?.with_failure_probability(0.1);
//! let mut loader = CatalogLoader::new(source);
//! match loader.load().await {
//!     Ok(catalog) => println!("{} opportunities", catalog.len()),
//!     Err(e) if e.is_transient() => { /* offer a retry */ }
//!     Err(e) => return Err(e),
//! }
//! ```

#[allow(clippy::module_inception)]
mod catalog;
mod error;
mod loader;
mod source;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use loader::{CatalogLoader, LoadState};
pub use source::{CatalogSource, StaticCatalogSource};
