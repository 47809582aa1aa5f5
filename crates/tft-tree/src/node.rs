//! Node types: identified tree nodes and their identity-less raw form.

use serde::{Deserialize, Serialize};
use tft_types::NodeId;

/// Payload of a file node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    /// File name, unique among its siblings by convention.
    pub name: String,
    /// Editor language tag (e.g. `"javascript"`).
    #[serde(default)]
    pub language: String,
    /// Full text content.
    #[serde(default)]
    pub content: String,
}

impl FileData {
    /// Create a file payload.
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            content: content.into(),
        }
    }
}

/// Payload of a folder node. The folder owns its children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderData {
    pub name: String,
    pub files: Vec<Node>,
}

/// Discriminator of a node. Folders order before files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::File => write!(f, "file"),
        }
    }
}

/// A file or folder in the tree, carrying a stable [`NodeId`].
///
/// Serialized as `{"kind": "file" | "folder", "id": "...", "data": {...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Folder { id: NodeId, data: FolderData },
    File { id: NodeId, data: FileData },
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Self::Folder { id, .. } | Self::File { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder { data, .. } => &data.name,
            Self::File { data, .. } => &data.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Folder { .. } => NodeKind::Folder,
            Self::File { .. } => NodeKind::File,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Direct children. Files have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Folder { data, .. } => &data.files,
            Self::File { .. } => &[],
        }
    }

    /// Mutable child list, or `None` for files.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Folder { data, .. } => Some(&mut data.files),
            Self::File { .. } => None,
        }
    }

    pub fn file_data(&self) -> Option<&FileData> {
        match self {
            Self::File { data, .. } => Some(data),
            Self::Folder { .. } => None,
        }
    }

    /// Replace the name, keeping id and children.
    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Self::Folder { data, .. } => data.name = name.into(),
            Self::File { data, .. } => data.name = name.into(),
        }
    }

    /// Returns `true` if `id` is this node or any node below it.
    pub fn contains(&self, id: NodeId) -> bool {
        self.id() == id || self.children().iter().any(|child| child.contains(id))
    }
}

/// Raw folder input: a name and identity-less children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFolder {
    pub name: String,
    #[serde(default)]
    pub files: Vec<RawNode>,
}

impl RawFolder {
    /// An empty folder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// Append a child (builder style).
    pub fn with(mut self, child: impl Into<RawNode>) -> Self {
        self.files.push(child.into());
        self
    }
}

/// A node without identity.
///
/// This is both the input of node construction and the transport
/// representation: `{"kind": "file" | "folder", "data": {...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum RawNode {
    Folder(RawFolder),
    File(FileData),
}

impl RawNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::File(file) => &file.name,
        }
    }
}

impl From<FileData> for RawNode {
    fn from(data: FileData) -> Self {
        Self::File(data)
    }
}

impl From<RawFolder> for RawNode {
    fn from(folder: RawFolder) -> Self {
        Self::Folder(folder)
    }
}
