use super::tree::{all_child_category_ids, find_category_by_name, CategoryIndex};
use contracts::catalog::{BackendFilters, Category, FilterOption};
use std::collections::HashSet;

/// Reduce a category selection to the minimal id list for the backend.
///
/// A selected node whose every descendant is also selected stands for its
/// whole subtree, so the descendants are dropped. Everything else that is
/// selected is sent as-is, in input order and without duplicates. Ids that
/// are not in the tree are passed through unchanged.
pub fn collapse_category_ids(selected: &[i64], tree: &[Category]) -> Vec<i64> {
    let index = CategoryIndex::new(tree);
    let selected_set: HashSet<i64> = selected.iter().copied().collect();

    // Pass 1: mark descendants of fully selected nodes as covered
    let mut covered: HashSet<i64> = HashSet::new();
    for &id in selected {
        if covered.contains(&id) {
            continue;
        }
        let Some(node) = index.get(id) else {
            continue;
        };
        if node.is_leaf() {
            continue;
        }
        let descendants = all_child_category_ids(node);
        if descendants.iter().all(|d| selected_set.contains(d)) {
            covered.extend(descendants);
        }
    }

    // Pass 2: emit what is selected and not covered
    let mut processed: HashSet<i64> = HashSet::new();
    let mut ids = Vec::new();
    for &id in selected {
        if covered.contains(&id) || !processed.insert(id) {
            continue;
        }
        ids.push(id);
    }

    if ids.len() != selected.len() {
        tracing::debug!(
            "collapsed {} selected categories into {} query ids",
            selected.len(),
            ids.len()
        );
    }
    ids
}

/// Category ids for a query from the selected category options
pub fn extract_category_ids(selected: &[FilterOption], catalog: &BackendFilters) -> Vec<i64> {
    let ids: Vec<i64> = selected.iter().map(|option| option.id).collect();
    collapse_category_ids(&ids, &catalog.categories)
}

/// Category ids for a query from selected display names. Names missing from
/// the tree have no id and are dropped.
pub fn map_category_names_to_ids(names: &[String], catalog: &BackendFilters) -> Vec<i64> {
    let ids: Vec<i64> = names
        .iter()
        .filter_map(|name| {
            let found = find_category_by_name(&catalog.categories, name);
            if found.is_none() {
                tracing::debug!("category '{}' not found in catalog, skipped", name);
            }
            found.map(|node| node.id)
        })
        .collect();
    collapse_category_ids(&ids, &catalog.categories)
}
