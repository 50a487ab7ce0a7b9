//! Filter catalog: normalization of the wire shape and the per-session cache.

mod cache;
mod normalize;

pub use cache::{CatalogCache, CatalogStatus};
pub use normalize::{normalize_catalog, parse_catalog};
