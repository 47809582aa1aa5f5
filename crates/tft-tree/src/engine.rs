//! The tree engine: copy-on-write mutation operations.
//!
//! Every operation takes the current snapshot by reference, clones it,
//! applies the change to the clone and returns the clone. The input is never
//! modified, so earlier snapshots stay valid for undo or concurrent readers.
//!
//! Each operation comes in two flavours:
//!
//! - `try_*` reports why a request could not be applied as a [`TreeError`].
//! - The plain form never fails. A request that cannot be applied returns the
//!   unchanged tree (or `None` for [`TreeEngine::add_file`]).
//!
//! After every insertion the destination sibling list is re-sorted, and only
//! that list (with the subtree below it). Removals keep the remaining order.

use std::collections::HashSet;
use std::sync::Arc;

use tft_types::{IdProvider, NodeId, UuidIdProvider};
use tracing::{debug, warn};

use crate::build;
use crate::config::TreeConfig;
use crate::error::{TreeError, TreeResult};
use crate::lookup;
use crate::node::{FileData, Node, RawFolder, RawNode};
use crate::order;
use crate::transport;
use crate::tree::FileTree;

/// Result of adding a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddedFile {
    pub tree: FileTree,
    /// Id of the new file, so the caller can open it.
    pub new_file_id: NodeId,
}

/// Result of adding a file or a folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddedItem {
    pub tree: FileTree,
    /// Set only when a file was actually created.
    pub new_file_id: Option<NodeId>,
}

/// Result of deleting a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletedItem {
    pub tree: FileTree,
    /// The caller must drop its open-file reference.
    pub open_file_cleared: bool,
}

/// Applies user intents to tree snapshots.
///
/// Holds the engine configuration and the id provider used for every node
/// it constructs.
pub struct TreeEngine {
    config: TreeConfig,
    ids: Arc<dyn IdProvider>,
}

impl std::fmt::Debug for TreeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for TreeEngine {
    fn default() -> Self {
        Self::new(TreeConfig::default(), Arc::new(UuidIdProvider))
    }
}

impl TreeEngine {
    pub fn new(config: TreeConfig, ids: Arc<dyn IdProvider>) -> Self {
        Self { config, ids }
    }

    /// Default configuration with a custom id provider.
    pub fn with_ids(ids: Arc<dyn IdProvider>) -> Self {
        Self::new(TreeConfig::default(), ids)
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// Build a file node; `None` for reserved names.
    pub fn create_file(&self, data: FileData) -> Option<Node> {
        build::create_file(self.ids.as_ref(), &self.config, data)
    }

    /// Build a folder subtree with fresh ids.
    pub fn create_folder(&self, raw: RawFolder) -> Node {
        build::create_folder(self.ids.as_ref(), &self.config, raw)
    }

    // ---------------------------------------------------------------
    // Insertion
    // ---------------------------------------------------------------

    /// Add a new file at the root or inside `parent`.
    pub fn try_add_file(
        &self,
        tree: &FileTree,
        data: FileData,
        parent: Option<NodeId>,
    ) -> TreeResult<AddedFile> {
        check_destination(tree, parent)?;
        let name = data.name.clone();
        let node = self
            .create_file(data)
            .ok_or(TreeError::ReservedName(name))?;
        let new_file_id = node.id();

        let mut next = tree.clone();
        attach(&mut next, parent, node)?;
        debug!(node = %new_file_id.short_id(), parent = ?parent, "added file");
        Ok(AddedFile {
            tree: next,
            new_file_id,
        })
    }

    /// Add a new file; `None` if the name is reserved or the parent is missing.
    pub fn add_file(
        &self,
        tree: &FileTree,
        data: FileData,
        parent: Option<NodeId>,
    ) -> Option<AddedFile> {
        match self.try_add_file(tree, data, parent) {
            Ok(added) => Some(added),
            Err(e) => {
                debug!(error = %e, "file not added");
                None
            }
        }
    }

    /// Build a folder subtree from raw data and insert it.
    pub fn try_add_folder(
        &self,
        tree: &FileTree,
        raw: RawFolder,
        parent: Option<NodeId>,
    ) -> TreeResult<FileTree> {
        check_destination(tree, parent)?;
        let node = self.create_folder(raw);
        let id = node.id();

        let mut next = tree.clone();
        attach(&mut next, parent, node)?;
        debug!(node = %id.short_id(), parent = ?parent, "added folder");
        Ok(next)
    }

    pub fn add_folder(&self, tree: &FileTree, raw: RawFolder, parent: Option<NodeId>) -> FileTree {
        self.try_add_folder(tree, raw, parent)
            .unwrap_or_else(|e| unchanged(tree, "folder not added", &e))
    }

    /// Insert an already-identified node (and its subtree) as-is.
    ///
    /// Ids are kept. Fails if any of them already exists in `tree` or
    /// appears twice within `node`.
    pub fn try_insert_node(
        &self,
        tree: &FileTree,
        node: Node,
        parent: Option<NodeId>,
    ) -> TreeResult<FileTree> {
        let mut seen = HashSet::new();
        for id in lookup::collect_ids(std::slice::from_ref(&node)) {
            if !seen.insert(id) || tree.contains(id) {
                return Err(TreeError::DuplicateId(id));
            }
        }
        check_destination(tree, parent)?;

        let id = node.id();
        let mut next = tree.clone();
        attach(&mut next, parent, node)?;
        debug!(node = %id.short_id(), parent = ?parent, "inserted node");
        Ok(next)
    }

    pub fn insert_node(&self, tree: &FileTree, node: Node, parent: Option<NodeId>) -> FileTree {
        self.try_insert_node(tree, node, parent)
            .unwrap_or_else(|e| unchanged(tree, "node not inserted", &e))
    }

    /// Add a file or a folder depending on the raw kind.
    pub fn add_item(&self, tree: &FileTree, raw: RawNode, parent: Option<NodeId>) -> AddedItem {
        match raw {
            RawNode::File(data) => match self.add_file(tree, data, parent) {
                Some(added) => AddedItem {
                    tree: added.tree,
                    new_file_id: Some(added.new_file_id),
                },
                None => AddedItem {
                    tree: tree.clone(),
                    new_file_id: None,
                },
            },
            RawNode::Folder(folder) => AddedItem {
                tree: self.add_folder(tree, folder, parent),
                new_file_id: None,
            },
        }
    }

    // ---------------------------------------------------------------
    // Rename / delete / move / edit
    // ---------------------------------------------------------------

    /// Rename a file or folder. Id and children are kept.
    ///
    /// The sibling list holding the node is re-sorted so the order
    /// invariant survives the new name.
    pub fn try_rename_node(
        &self,
        tree: &FileTree,
        target: NodeId,
        new_name: &str,
    ) -> TreeResult<FileTree> {
        let parents = parent_ids(tree, target)?;
        let mut next = tree.clone();
        let list = lookup::sibling_list_mut(next.nodes_mut(), &parents)
            .ok_or(TreeError::NodeNotFound(target))?;
        let node = list
            .iter_mut()
            .find(|node| node.id() == target)
            .ok_or(TreeError::NodeNotFound(target))?;
        node.set_name(new_name);
        order::sort_level(list);

        debug!(node = %target.short_id(), name = new_name, "renamed node");
        Ok(next)
    }

    pub fn rename_node(&self, tree: &FileTree, target: NodeId, new_name: &str) -> FileTree {
        self.try_rename_node(tree, target, new_name)
            .unwrap_or_else(|e| unchanged(tree, "node not renamed", &e))
    }

    /// Remove a node; folders take their whole subtree with them.
    ///
    /// `is_file_open` is the caller's assertion that the removed node is the
    /// open file. It is echoed back as `open_file_cleared`.
    pub fn try_delete_item(
        &self,
        tree: &FileTree,
        target: NodeId,
        is_file_open: bool,
    ) -> TreeResult<DeletedItem> {
        let mut next = tree.clone();
        let removed = detach(&mut next, target)?;
        debug!(
            node = %target.short_id(),
            kind = %removed.kind(),
            "deleted node"
        );
        Ok(DeletedItem {
            tree: next,
            open_file_cleared: is_file_open,
        })
    }

    pub fn delete_item(&self, tree: &FileTree, target: NodeId, is_file_open: bool) -> DeletedItem {
        self.try_delete_item(tree, target, is_file_open)
            .unwrap_or_else(|e| DeletedItem {
                tree: unchanged(tree, "node not deleted", &e),
                open_file_cleared: is_file_open,
            })
    }

    /// Relocate `item` to the root or into the folder `new_parent`.
    ///
    /// The node is detached and re-attached, not rebuilt: its id and every
    /// descendant id survive. The node is looked up by id, so the version
    /// currently in `tree` is the one that moves. Moving a folder into
    /// itself or below itself is refused.
    pub fn try_move_item(
        &self,
        tree: &FileTree,
        item: &Node,
        new_parent: Option<NodeId>,
    ) -> TreeResult<FileTree> {
        let item_id = item.id();
        let current = tree.find(item_id).ok_or(TreeError::NodeNotFound(item_id))?;
        if let Some(target) = new_parent {
            if current.contains(target) {
                return Err(TreeError::MoveIntoDescendant {
                    node: item_id,
                    target,
                });
            }
        }
        check_destination(tree, new_parent)?;

        let mut next = tree.clone();
        let node = detach(&mut next, item_id)?;
        attach(&mut next, new_parent, node)?;
        debug!(node = %item_id.short_id(), parent = ?new_parent, "moved node");
        Ok(next)
    }

    pub fn move_item(&self, tree: &FileTree, item: &Node, new_parent: Option<NodeId>) -> FileTree {
        match self.try_move_item(tree, item, new_parent) {
            Ok(next) => next,
            Err(e @ TreeError::MoveIntoDescendant { .. }) => {
                warn!(error = %e, "refusing move");
                tree.clone()
            }
            Err(e) => unchanged(tree, "node not moved", &e),
        }
    }

    /// Replace the content of a file. Name, language and id are kept.
    pub fn try_change_file_content(
        &self,
        tree: &FileTree,
        file_id: NodeId,
        content: impl Into<String>,
    ) -> TreeResult<FileTree> {
        let mut next = tree.clone();
        match lookup::find_node_by_id_mut(next.nodes_mut(), file_id) {
            Some(Node::File { data, .. }) => data.content = content.into(),
            Some(Node::Folder { .. }) => return Err(TreeError::NotAFile(file_id)),
            None => return Err(TreeError::NodeNotFound(file_id)),
        }
        debug!(node = %file_id.short_id(), "changed file content");
        Ok(next)
    }

    pub fn change_file_content(
        &self,
        tree: &FileTree,
        file_id: NodeId,
        content: impl Into<String>,
    ) -> FileTree {
        self.try_change_file_content(tree, file_id, content)
            .unwrap_or_else(|e| unchanged(tree, "content not changed", &e))
    }

    // ---------------------------------------------------------------
    // Transport
    // ---------------------------------------------------------------

    /// Rebuild a tree from its transport form with fresh ids.
    pub fn import_tree(&self, raw: &[RawNode]) -> FileTree {
        transport::import_tree(self.ids.as_ref(), raw)
    }

    /// Parse transport JSON and import it.
    pub fn import_json(&self, json: &str) -> TreeResult<FileTree> {
        let raw = transport::parse_json(json)?;
        Ok(self.import_tree(&raw))
    }
}

fn unchanged(tree: &FileTree, what: &str, error: &TreeError) -> FileTree {
    debug!(error = %error, "{what}");
    tree.clone()
}

/// Ids of the folders above `target`, root first.
fn parent_ids(tree: &FileTree, target: NodeId) -> TreeResult<Vec<NodeId>> {
    let path = lookup::find_parent_path_by_key(tree.nodes(), target)
        .ok_or(TreeError::NodeNotFound(target))?;
    Ok(path.iter().map(|node| node.id()).collect())
}

/// Ids from the root down to the folder `parent`, inclusive.
fn folder_path(tree: &FileTree, parent: NodeId) -> TreeResult<Vec<NodeId>> {
    let path = lookup::find_folder_path_by_key(tree.nodes(), parent)
        .ok_or(TreeError::NodeNotFound(parent))?;
    match path.last() {
        Some(node) if node.is_folder() => Ok(path.iter().map(|node| node.id()).collect()),
        _ => Err(TreeError::NotAFolder(parent)),
    }
}

fn check_destination(tree: &FileTree, parent: Option<NodeId>) -> TreeResult<()> {
    match parent {
        Some(parent) => folder_path(tree, parent).map(|_| ()),
        None => Ok(()),
    }
}

/// Push `node` into the destination list and re-sort that list.
fn attach(tree: &mut FileTree, parent: Option<NodeId>, node: Node) -> TreeResult<()> {
    let list = match parent {
        None => tree.nodes_mut(),
        Some(parent) => {
            let path = folder_path(tree, parent)?;
            lookup::sibling_list_mut(tree.nodes_mut(), &path)
                .ok_or(TreeError::NotAFolder(parent))?
        }
    };
    list.push(node);
    order::sort_siblings(list);
    Ok(())
}

/// Take `target` out of its sibling list, keeping the others in place.
fn detach(tree: &mut FileTree, target: NodeId) -> TreeResult<Node> {
    let parents = parent_ids(tree, target)?;
    let list = lookup::sibling_list_mut(tree.nodes_mut(), &parents)
        .ok_or(TreeError::NodeNotFound(target))?;
    let index = list
        .iter()
        .position(|node| node.id() == target)
        .ok_or(TreeError::NodeNotFound(target))?;
    Ok(list.remove(index))
}
