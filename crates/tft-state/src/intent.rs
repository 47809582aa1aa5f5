use serde::{Deserialize, Serialize};
use tft_tree::{Node, RawNode};
use tft_types::NodeId;

/// A discrete user action on the file tree.
///
/// Serialized as `{"type": "addItem", ...}` with camelCase fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    /// Add a file or folder at the root or under `parent_folder_id`.
    AddItem {
        data: RawNode,
        #[serde(default)]
        parent_folder_id: Option<NodeId>,
    },
    /// Move an existing node to the root or into `new_folder_id`.
    MoveItem {
        item: Node,
        #[serde(default)]
        new_folder_id: Option<NodeId>,
    },
    /// Rename a file or folder.
    RenameFolder { folder_id: NodeId, new_name: String },
    /// Delete a node and everything below it.
    DeleteItem { item_id: NodeId },
    /// Point the editor at a file, or at nothing.
    OpenFile { file_id: Option<NodeId> },
    /// Replace the content of the open file.
    ChangeOpenFileContent { value: String },
}

impl Intent {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "addItem",
            Self::MoveItem { .. } => "moveItem",
            Self::RenameFolder { .. } => "renameFolder",
            Self::DeleteItem { .. } => "deleteItem",
            Self::OpenFile { .. } => "openFile",
            Self::ChangeOpenFileContent { .. } => "changeOpenFileContent",
        }
    }
}

#[cfg(test)]
mod tests {
    use tft_tree::{FileData, RawFolder};

    use super::*;

    #[test]
    fn add_item_parses_from_json() {
        let json = r#"{
            "type": "addItem",
            "data": {"kind": "folder", "data": {"name": "src", "files": []}}
        }"#;
        let intent: Intent = serde_json::from_str(json).unwrap();
        assert_eq!(
            intent,
            Intent::AddItem {
                data: RawNode::Folder(RawFolder::new("src")),
                parent_folder_id: None,
            }
        );
    }

    #[test]
    fn fields_are_camel_case() {
        let intent = Intent::ChangeOpenFileContent { value: "x".into() };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["type"], "changeOpenFileContent");

        let add = Intent::AddItem {
            data: RawNode::File(FileData::new("a", "", "")),
            parent_folder_id: None,
        };
        let json = serde_json::to_value(&add).unwrap();
        assert!(json.get("parentFolderId").is_some());
        assert_eq!(add.name(), "addItem");
    }
}
