use serde::{Deserialize, Serialize};
use tft_types::NodeId;

use crate::lookup;
use crate::node::Node;

/// One snapshot of the whole tree: the root sibling list.
///
/// A `FileTree` is never mutated by the engine once handed out. Every
/// operation clones it, changes the clone and returns the clone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTree {
    nodes: Vec<Node>,
}

impl FileTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing root list as-is (no sorting, no id checks).
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Root-level nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of root-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Depth-first lookup of a node anywhere in the tree.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        lookup::find_node_by_id(&self.nodes, id)
    }

    /// Returns `true` if a node with this id exists anywhere in the tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Slash-joined path of names from the root to `id`.
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        lookup::get_file_path(&self.nodes, Some(id))
    }

    /// Node at a slash-separated path of names.
    pub fn resolve(&self, path: &str) -> Option<&Node> {
        lookup::resolve_path(&self.nodes, path)
    }

    /// Total number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        lookup::collect_ids(&self.nodes).len()
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }
}

impl From<Vec<Node>> for FileTree {
    fn from(nodes: Vec<Node>) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<'a> IntoIterator for &'a FileTree {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
