//! Sibling ordering: folders before files, then names ascending.
//!
//! Names compare byte-wise, so the order is case-sensitive (`"B" < "a"`).

use std::cmp::Ordering;

use crate::node::Node;

/// Total order over siblings.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    a.kind()
        .cmp(&b.kind())
        .then_with(|| a.name().cmp(b.name()))
}

/// Sort one sibling list without touching the children of its folders.
pub fn sort_level(list: &mut [Node]) {
    list.sort_by(compare_nodes);
}

/// Sort a sibling list and, recursively, every folder below it.
pub fn sort_siblings(list: &mut [Node]) {
    sort_level(list);
    for node in list.iter_mut() {
        if let Some(children) = node.children_mut() {
            sort_siblings(children);
        }
    }
}

/// Returns `true` if every sibling list at every depth is in order.
pub fn is_sorted_recursive(list: &[Node]) -> bool {
    list.windows(2)
        .all(|pair| compare_nodes(&pair[0], &pair[1]) != Ordering::Greater)
        && list.iter().all(|node| is_sorted_recursive(node.children()))
}
