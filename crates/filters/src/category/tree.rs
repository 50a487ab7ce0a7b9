use crate::lookup::extract_name;
use contracts::catalog::Category;
use std::collections::HashMap;

/// Pre-order DFS for a node by id
pub fn find_category_by_id(list: &[Category], id: i64) -> Option<&Category> {
    for node in list {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_category_by_id(&node.subcategories, id) {
            return Some(found);
        }
    }
    None
}

/// Pre-order DFS for a node by display name
pub fn find_category_by_name<'a>(list: &'a [Category], name: &str) -> Option<&'a Category> {
    for node in list {
        if extract_name(node) == name {
            return Some(node);
        }
        if let Some(found) = find_category_by_name(&node.subcategories, name) {
            return Some(found);
        }
    }
    None
}

/// Every descendant of `node` in pre-order, the node itself excluded
pub fn all_child_category_ids(node: &Category) -> Vec<i64> {
    let mut ids = Vec::new();
    collect_descendants(node, &mut |child| ids.push(child.id));
    ids
}

pub fn all_child_category_names(node: &Category) -> Vec<String> {
    let mut names = Vec::new();
    collect_descendants(node, &mut |child| names.push(extract_name(child)));
    names
}

fn collect_descendants<'a>(node: &'a Category, visit: &mut impl FnMut(&'a Category)) {
    for child in &node.subcategories {
        visit(child);
        collect_descendants(child, visit);
    }
}

/// The whole tree in pre-order
pub fn flatten_categories(list: &[Category]) -> Vec<&Category> {
    let mut out = Vec::new();
    for node in list {
        out.push(node);
        collect_descendants(node, &mut |child| out.push(child));
    }
    out
}

/// Id lookup and child→parent map over one catalog tree.
///
/// Ids are assumed unique; if the backend repeats one, the first node in
/// pre-order wins.
#[derive(Debug, Clone)]
pub struct CategoryIndex<'a> {
    nodes: HashMap<i64, &'a Category>,
    parents: HashMap<i64, i64>,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(tree: &'a [Category]) -> Self {
        let mut index = Self {
            nodes: HashMap::new(),
            parents: HashMap::new(),
        };
        for root in tree {
            index.insert(root, None);
        }
        index
    }

    fn insert(&mut self, node: &'a Category, parent: Option<i64>) {
        if self.nodes.contains_key(&node.id) {
            return;
        }
        self.nodes.insert(node.id, node);
        if let Some(parent) = parent {
            self.parents.insert(node.id, parent);
        }
        for child in &node.subcategories {
            self.insert(child, Some(node.id));
        }
    }

    pub fn get(&self, id: i64) -> Option<&'a Category> {
        self.nodes.get(&id).copied()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn parent_id(&self, id: i64) -> Option<i64> {
        self.parents.get(&id).copied()
    }

    /// Ancestors of `id`, immediate parent first
    pub fn ancestor_ids(&self, id: i64) -> Vec<i64> {
        let mut ancestors = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent_id(current) {
            ancestors.push(parent);
            current = parent;
        }
        ancestors
    }

    /// Descendants of `id`; empty for leaves and unknown ids
    pub fn descendant_ids(&self, id: i64) -> Vec<i64> {
        self.get(id).map(all_child_category_ids).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
