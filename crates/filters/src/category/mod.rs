//! Category tree: lookup, parent/child collapsing for queries and the
//! checkbox-tree selection reducer.

mod collapse;
mod toggle;
mod tree;

pub use collapse::{collapse_category_ids, extract_category_ids, map_category_names_to_ids};
pub use toggle::{
    options_to_selection, reduce_selection, selection_state, selection_to_options,
    toggle_category, CategoryAction, CategorySelectionState,
};
pub use tree::{
    all_child_category_ids, all_child_category_names, find_category_by_id,
    find_category_by_name, flatten_categories, CategoryIndex,
};
