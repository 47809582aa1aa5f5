use serde::{Deserialize, Serialize};
use tft_tree::{FileTree, Node};
use tft_types::NodeId;

/// One snapshot of the editor: the tree and the file being edited.
///
/// `open_file_id`, when set, names a file node that exists in `files`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub files: FileTree,
    pub open_file_id: Option<NodeId>,
}

impl EditorState {
    /// No files, nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loaded tree with nothing open.
    pub fn with_files(files: FileTree) -> Self {
        Self {
            files,
            open_file_id: None,
        }
    }

    /// The open file node, if any.
    pub fn open_file(&self) -> Option<&Node> {
        self.files.find(self.open_file_id?)
    }

    /// Slash path of the open file.
    pub fn open_file_path(&self) -> Option<String> {
        self.files.path_of(self.open_file_id?)
    }

    /// Merge a partial update into a new snapshot.
    pub fn apply(&self, update: StateUpdate) -> EditorState {
        let files = update.files.unwrap_or_else(|| self.files.clone());
        let open_file_id = match update.open_file {
            OpenFileChange::Keep => self.open_file_id,
            OpenFileChange::Open(id) => Some(id),
            OpenFileChange::Close => None,
        };
        EditorState {
            files,
            open_file_id,
        }
    }
}

/// What happens to the open-file pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenFileChange {
    #[default]
    Keep,
    Open(NodeId),
    Close,
}

/// Partial state produced by the reducer. Absent parts are left as they are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub files: Option<FileTree>,
    pub open_file: OpenFileChange,
}

impl StateUpdate {
    /// Leave everything as it is.
    pub fn none() -> Self {
        Self::default()
    }

    /// Replace the tree only.
    pub fn files(files: FileTree) -> Self {
        Self {
            files: Some(files),
            open_file: OpenFileChange::Keep,
        }
    }

    pub fn with_open_file(mut self, change: OpenFileChange) -> Self {
        self.open_file = change;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_none() && self.open_file == OpenFileChange::Keep
    }
}
