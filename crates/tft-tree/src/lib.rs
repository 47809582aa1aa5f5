//! Tree engine for the template file tree.
//!
//! Maintains an in-memory hierarchy of named files and folders as immutable
//! snapshots. Each user intent (add, move, rename, delete, edit content) turns
//! one snapshot into the next without touching the previous one.
//!
//! # Key Types
//!
//! - [`FileTree`] -- One snapshot: the root sibling list
//! - [`Node`] -- A file or folder with a stable [`NodeId`]
//! - [`RawNode`] -- Identity-less node, used for construction and transport
//! - [`TreeEngine`] -- Mutation operations, node construction, import
//! - [`TreeConfig`] -- Reserved file names
//!
//! # Invariants
//!
//! - Ids are unique across a tree and never reassigned.
//! - Every sibling list holds folders before files, each group ordered by
//!   name (byte-wise, case-sensitive).
//! - No operation mutates its input snapshot.

pub mod build;
pub mod config;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod node;
pub mod order;
pub mod transport;
pub mod tree;

#[cfg(test)]
mod fixtures;

pub use config::TreeConfig;
pub use engine::{AddedFile, AddedItem, DeletedItem, TreeEngine};
pub use error::{TreeError, TreeResult};
pub use lookup::{
    find_folder_path_by_key, find_node_by_id, find_parent_path_by_key, get_file_path,
    resolve_path,
};
pub use node::{FileData, FolderData, Node, NodeKind, RawFolder, RawNode};
pub use order::{compare_nodes, is_sorted_recursive, sort_siblings};
pub use tft_types::{IdProvider, NodeId, SequentialIdProvider, UuidIdProvider};
pub use transport::{export_json, export_tree, import_tree};
pub use tree::FileTree;
