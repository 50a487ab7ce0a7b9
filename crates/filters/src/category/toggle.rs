use super::tree::{flatten_categories, CategoryIndex};
use crate::lookup::extract_name;
use contracts::catalog::{Category, FilterOption};
use std::collections::BTreeSet;

/// Действие над деревом чекбоксов категорий
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryAction {
    Toggle(i64),
    Select(i64),
    Deselect(i64),
    Clear,
}

/// Checkbox state of one node for a given selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelectionState {
    Checked,
    Indeterminate,
    Unchecked,
}

/// Apply an action to a category selection.
///
/// Selecting a node selects its whole subtree. Deselecting a node removes
/// its subtree and every ancestor, since an ancestor counts as selected
/// only while all of its descendants are.
pub fn reduce_selection(
    selection: &BTreeSet<i64>,
    action: CategoryAction,
    index: &CategoryIndex<'_>,
) -> BTreeSet<i64> {
    let mut next = selection.clone();
    match action {
        CategoryAction::Toggle(id) if selection.contains(&id) => {
            deselect(&mut next, id, index);
        }
        CategoryAction::Toggle(id) | CategoryAction::Select(id) => {
            next.insert(id);
            next.extend(index.descendant_ids(id));
        }
        CategoryAction::Deselect(id) => deselect(&mut next, id, index),
        CategoryAction::Clear => next.clear(),
    }
    next
}

fn deselect(selection: &mut BTreeSet<i64>, id: i64, index: &CategoryIndex<'_>) {
    selection.remove(&id);
    for descendant in index.descendant_ids(id) {
        selection.remove(&descendant);
    }
    for ancestor in index.ancestor_ids(id) {
        selection.remove(&ancestor);
    }
}

pub fn toggle_category(
    selection: &BTreeSet<i64>,
    id: i64,
    index: &CategoryIndex<'_>,
) -> BTreeSet<i64> {
    reduce_selection(selection, CategoryAction::Toggle(id), index)
}

pub fn selection_state(
    selection: &BTreeSet<i64>,
    id: i64,
    index: &CategoryIndex<'_>,
) -> CategorySelectionState {
    if selection.contains(&id) {
        CategorySelectionState::Checked
    } else if index
        .descendant_ids(id)
        .iter()
        .any(|d| selection.contains(d))
    {
        CategorySelectionState::Indeterminate
    } else {
        CategorySelectionState::Unchecked
    }
}

/// Selected options in tree pre-order, for storing in `FilterState`
pub fn selection_to_options(selection: &BTreeSet<i64>, tree: &[Category]) -> Vec<FilterOption> {
    flatten_categories(tree)
        .into_iter()
        .filter(|node| selection.contains(&node.id))
        .map(|node| FilterOption::new(node.id, extract_name(node)))
        .collect()
}

pub fn options_to_selection(options: &[FilterOption]) -> BTreeSet<i64> {
    options.iter().map(|option| option.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // A -> [B -> [D, E]]
    fn tree() -> Vec<Category> {
        vec![Category::new(1, "A").with_children(vec![
            Category::new(2, "B").with_children(vec![Category::new(4, "D"), Category::new(5, "E")]),
        ])]
    }

    fn set(ids: &[i64]) -> BTreeSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_select_parent_selects_subtree() {
        let t = tree();
        let index = CategoryIndex::new(&t);
        let next = toggle_category(&BTreeSet::new(), 1, &index);
        assert_eq!(next, set(&[1, 2, 4, 5]));
    }

    #[test]
    fn test_deselect_child_invalidates_ancestors() {
        let t = tree();
        let index = CategoryIndex::new(&t);
        let next = toggle_category(&set(&[1, 2, 4, 5]), 4, &index);
        assert_eq!(next, set(&[5]));
    }

    #[test]
    fn test_deselect_parent_clears_subtree() {
        let t = tree();
        let index = CategoryIndex::new(&t);
        let next = reduce_selection(&set(&[1, 2, 4, 5]), CategoryAction::Deselect(2), &index);
        assert!(next.is_empty());
    }

    #[test]
    fn test_select_is_idempotent_and_clear() {
        let t = tree();
        let index = CategoryIndex::new(&t);
        let once = reduce_selection(&BTreeSet::new(), CategoryAction::Select(2), &index);
        let twice = reduce_selection(&once, CategoryAction::Select(2), &index);
        assert_eq!(once, twice);
        assert!(reduce_selection(&twice, CategoryAction::Clear, &index).is_empty());
    }

    #[test]
    fn test_unknown_id_toggles_alone() {
        let t = tree();
        let index = CategoryIndex::new(&t);
        let next = toggle_category(&BTreeSet::new(), 99, &index);
        assert_eq!(next, set(&[99]));
        assert!(toggle_category(&next, 99, &index).is_empty());
    }

    #[test]
    fn test_selection_state() {
        let t = tree();
        let index = CategoryIndex::new(&t);
        let selection = set(&[5]);
        assert_eq!(selection_state(&selection, 5, &index), CategorySelectionState::Checked);
        assert_eq!(selection_state(&selection, 1, &index), CategorySelectionState::Indeterminate);
        assert_eq!(selection_state(&selection, 4, &index), CategorySelectionState::Unchecked);
    }

    #[test]
    fn test_options_roundtrip_in_preorder() {
        let t = tree();
        let options = selection_to_options(&set(&[5, 2]), &t);
        let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["B", "E"]);
        assert_eq!(options_to_selection(&options), set(&[2, 5]));
    }
}
