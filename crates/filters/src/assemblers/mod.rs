//! Per-resource query assemblers.
//!
//! Each assembler takes the filter state, optional explicit pagination and
//! the catalog, and builds the flat query DTO of its resource. Empty or
//! default facets are left out, names that no longer resolve are dropped,
//! and the category facet goes through parent/child collapsing.

mod orders;
mod parts;
mod returns;
mod statistics;

pub use orders::orders_query_params;
pub use parts::filter_state_to_query_params;
pub use returns::returns_query_params;
pub use statistics::statistics_query_params;

use crate::category::{collapse_category_ids, extract_category_ids};
use crate::error::FilterError;
use crate::lookup::{map_facet_name_to_id, Facet};
use crate::shared::date_utils::format_date;
use contracts::catalog::{BackendFilters, FilterOption};
use contracts::shared::range::DateRange;
use serde::Serialize;

/// Serialize a query DTO into a URL query string (without the leading `?`)
pub fn to_query_string<T: Serialize>(query: &T) -> Result<String, FilterError> {
    Ok(serde_qs::to_string(query)?)
}

/// Ids of the selected names within a facet, unresolved names skipped
pub(crate) fn facet_ids(facet: Facet, names: &[String], catalog: Option<&BackendFilters>) -> Vec<i64> {
    if names.is_empty() {
        return Vec::new();
    }
    let Some(catalog) = catalog else {
        tracing::debug!("no catalog loaded, {:?} filter skipped", facet);
        return Vec::new();
    };

    let mut ids: Vec<i64> = Vec::with_capacity(names.len());
    for name in names {
        match map_facet_name_to_id(facet, name, catalog) {
            Some(id) if !ids.contains(&id) => ids.push(id),
            Some(_) => {}
            None => tracing::debug!("{:?} '{}' not found in catalog, skipped", facet, name),
        }
    }
    ids
}

/// Collapsed category ids. Without a catalog the selected ids go out as-is.
pub(crate) fn category_ids(selected: &[FilterOption], catalog: Option<&BackendFilters>) -> Vec<i64> {
    match catalog {
        Some(catalog) => extract_category_ids(selected, catalog),
        None => {
            let ids: Vec<i64> = selected.iter().map(|option| option.id).collect();
            collapse_category_ids(&ids, &[])
        }
    }
}

pub(crate) fn search_term(search: &str) -> Option<String> {
    let trimmed = search.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn date_bounds(range: &DateRange) -> (Option<String>, Option<String>) {
    (range.from.map(format_date), range.to.map(format_date))
}
