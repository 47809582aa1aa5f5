//! Depth-first traversal and lookup by id or by path.
//!
//! All functions walk sibling lists in their stored order and recurse into
//! every folder. None of them fail: a missing target is reported as `None`.

use tft_types::NodeId;

use crate::node::Node;

/// Find a node anywhere below `nodes`.
pub fn find_node_by_id(nodes: &[Node], id: NodeId) -> Option<&Node> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_node_by_id(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_node_by_id`].
pub fn find_node_by_id_mut(nodes: &mut [Node], id: NodeId) -> Option<&mut Node> {
    for node in nodes.iter_mut() {
        if node.id() == id {
            return Some(node);
        }
        if let Some(children) = node.children_mut() {
            if let Some(found) = find_node_by_id_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Ancestors of `id` from the root down, ending with the node itself.
///
/// A path of length 1 means the node sits at the root. For longer paths the
/// second-to-last element is the immediate parent folder.
pub fn find_folder_path_by_key(nodes: &[Node], id: NodeId) -> Option<Vec<&Node>> {
    let mut path = Vec::new();
    if descend(nodes, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

/// Like [`find_folder_path_by_key`] without the node itself.
///
/// Returns an empty path for root-level nodes.
pub fn find_parent_path_by_key(nodes: &[Node], id: NodeId) -> Option<Vec<&Node>> {
    let mut path = find_folder_path_by_key(nodes, id)?;
    path.pop();
    Some(path)
}

fn descend<'a>(nodes: &'a [Node], id: NodeId, path: &mut Vec<&'a Node>) -> bool {
    for node in nodes {
        path.push(node);
        if node.id() == id || descend(node.children(), id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Slash-joined names from the root down to `id`, e.g. `"src/index.js"`.
///
/// `None` when no id is given or the id is not in the tree.
pub fn get_file_path(nodes: &[Node], id: Option<NodeId>) -> Option<String> {
    let path = find_folder_path_by_key(nodes, id?)?;
    let names: Vec<&str> = path.iter().map(|node| node.name()).collect();
    Some(names.join("/"))
}

/// Inverse of [`get_file_path`]: walk the names of a slash-separated path.
///
/// Leading, trailing and repeated slashes are ignored. When siblings share
/// a name the first one in sibling order wins.
pub fn resolve_path<'a>(nodes: &'a [Node], path: &str) -> Option<&'a Node> {
    let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
    segments.peek()?;

    let mut list = nodes;
    let mut current = None;
    for segment in segments {
        let node = list.iter().find(|node| node.name() == segment)?;
        list = node.children();
        current = Some(node);
    }
    current
}

/// Child list of the folder reached by following `folder_path` from the root.
///
/// An empty path yields the root list itself. `None` if a step is missing
/// or lands on a file.
pub(crate) fn sibling_list_mut<'a>(
    mut list: &'a mut Vec<Node>,
    folder_path: &[NodeId],
) -> Option<&'a mut Vec<Node>> {
    for id in folder_path {
        let node = list.iter_mut().find(|node| node.id() == *id)?;
        list = node.children_mut()?;
    }
    Some(list)
}

/// Every id in the tree, in depth-first order.
pub fn collect_ids(nodes: &[Node]) -> Vec<NodeId> {
    let mut ids = Vec::new();
    collect_into(nodes, &mut ids);
    ids
}

fn collect_into(nodes: &[Node], ids: &mut Vec<NodeId>) {
    for node in nodes {
        ids.push(node.id());
        collect_into(node.children(), ids);
    }
}
