//! Error types for the tree crate.

use tft_types::NodeId;

/// Errors reported by the checked tree operations.
///
/// The unchecked operations never surface these: they fall back to the
/// unchanged tree instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    /// No node with this id exists in the tree.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// The node exists but is a file where a folder is required.
    #[error("not a folder: {0}")]
    NotAFolder(NodeId),

    /// The node exists but is a folder where a file is required.
    #[error("not a file: {0}")]
    NotAFile(NodeId),

    /// A folder cannot be moved into itself or one of its descendants.
    #[error("cannot move {node} into its own subtree ({target})")]
    MoveIntoDescendant { node: NodeId, target: NodeId },

    /// The inserted subtree carries an id already present in the tree.
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// The file name is reserved and no node is produced for it.
    #[error("reserved file name: {0}")]
    ReservedName(String),

    /// No node lives at the given slash-separated path.
    #[error("path not found: {0}")]
    PathNotFound(String),

    /// Transport (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Engine configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

/// Convenience alias for tree results.
pub type TreeResult<T> = Result<T, TreeError>;
